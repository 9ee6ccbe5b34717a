//! Pure mappings from game values to render directives.
//!
//! The host turns directives into widgets; nothing here knows about any UI
//! toolkit.

pub mod directive;

pub use directive::{ColorDirective, StimulusDirective, NORMAL_PROMPT};
