//! Stimuli and the generator that produces them.
//!
//! - `Stimulus`: swatch color plus label color
//! - `StimulusGenerator`: draws stimuli under Normal or Stroop rules from
//!   an injected `RandomSource`

pub mod generator;
pub mod pair;

pub use generator::StimulusGenerator;
pub use pair::Stimulus;
