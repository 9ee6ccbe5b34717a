//! Round lifecycle: state, events, and the engine that drives them.
//!
//! The host owns the clock and the input devices. It calls `tick` and
//! `submit_answer` on the engine and renders from `current_view()` or from
//! the queued `RoundEvent`s.

pub mod engine;
pub mod event;
pub mod state;

pub use engine::{RoundEngine, MAX_PENDING_EVENTS};
pub use event::{AnswerOutcome, RenderSink, RoundEvent};
pub use state::{Phase, RoundView};
