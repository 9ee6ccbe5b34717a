//! Round state and the read-only view handed to renderers.

use serde::{Deserialize, Serialize};

use crate::core::GameMode;
use crate::stimulus::Stimulus;

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No round has been started.
    #[default]
    Idle,
    /// Accepting answers and ticks.
    Running,
    /// Time ran out. Frozen until the next `start`.
    Finished,
}

/// Mutable state of one round. Only the engine's transitions touch it.
#[derive(Clone, Debug, Default)]
pub(crate) struct RoundState {
    pub(crate) mode: GameMode,
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    pub(crate) time_remaining_ms: u64,
    pub(crate) current_stimulus: Option<Stimulus>,
    pub(crate) answers: u32,
}

impl RoundState {
    /// Fresh running state for a new round.
    pub(crate) fn running(mode: GameMode, duration_ms: u64, first: Stimulus) -> Self {
        Self {
            mode,
            phase: Phase::Running,
            score: 0,
            time_remaining_ms: duration_ms,
            current_stimulus: Some(first),
            answers: 0,
        }
    }

    pub(crate) fn view(&self) -> RoundView {
        RoundView {
            mode: self.mode,
            phase: self.phase,
            score: self.score,
            time_remaining_ms: self.time_remaining_ms,
            current_stimulus: self.current_stimulus,
            answers: self.answers,
        }
    }
}

/// Snapshot of a round for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub mode: GameMode,
    pub phase: Phase,
    /// Correct answers so far.
    pub score: u32,
    pub time_remaining_ms: u64,
    pub current_stimulus: Option<Stimulus>,
    /// Answers submitted so far, correct or not.
    pub answers: u32,
}

impl RoundView {
    /// Whole seconds left, rounded down (the countdown label).
    #[must_use]
    pub fn time_remaining_secs(&self) -> u64 {
        self.time_remaining_ms / 1000
    }

    /// Wrong answers so far.
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.answers.saturating_sub(self.score)
    }

    /// Fraction of answers that were correct, or `None` before the first
    /// answer.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.answers == 0 {
            return None;
        }
        Some(f64::from(self.score) / f64::from(self.answers))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
