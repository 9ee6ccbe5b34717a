//! Events the engine emits for the host.
//!
//! The engine queues events as transitions happen. Hosts either drain the
//! queue themselves or forward it to a `RenderSink`.

use serde::{Deserialize, Serialize};

use crate::stimulus::Stimulus;

/// Whether a submitted answer scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == AnswerOutcome::Correct
    }
}

/// Something the host may want to render or react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new stimulus replaced the previous one.
    StimulusChanged(Stimulus),
    /// Current score after a start or an answer.
    ScoreChanged(u32),
    /// Time left after a start or a tick.
    TimeChanged { remaining_ms: u64 },
    /// Result of an answer (drives sounds and animations).
    AnswerOutcome(AnswerOutcome),
    /// The round ended.
    RoundOver { final_score: u32 },
}

/// Receiver for engine events.
pub trait RenderSink {
    fn on_event(&mut self, event: RoundEvent);
}

impl RenderSink for Vec<RoundEvent> {
    fn on_event(&mut self, event: RoundEvent) {
        self.push(event);
    }
}
