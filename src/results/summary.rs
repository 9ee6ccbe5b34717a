//! End-of-round summary: what the result screen shows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::high_score::HighScoreStore;
use super::tier::ScoreTier;

/// Outcome of a finished round after the high score was updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Final score of the round.
    pub score: u32,
    /// Best score before this round.
    pub previous_best: u32,
    /// Best score after this round.
    pub high_score: u32,
    pub tier: ScoreTier,
}

impl RoundSummary {
    /// Feed `final_score` into `store` and summarize.
    pub fn record<S: HighScoreStore + ?Sized>(final_score: u32, store: &mut S) -> Self {
        let previous_best = store.get();
        store.set_if_higher(final_score);
        let high_score = store.get();

        let summary = Self {
            score: final_score,
            previous_best,
            high_score,
            tier: ScoreTier::for_score(final_score),
        };
        debug!(
            score = final_score,
            previous_best,
            new_high = summary.is_new_high_score(),
            "round recorded"
        );
        summary
    }

    /// Did this round beat the previous best?
    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.score > self.previous_best
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}
