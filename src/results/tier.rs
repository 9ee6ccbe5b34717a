//! Score tiers for the result screen.

use serde::{Deserialize, Serialize};

/// Band a final score falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreTier {
    TryAgain,
    Average,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Lowest score for `Average`.
    pub const AVERAGE_MIN: u32 = 10;
    /// Lowest score for `Good`.
    pub const GOOD_MIN: u32 = 15;
    /// Lowest score for `Excellent`.
    pub const EXCELLENT_MIN: u32 = 25;

    /// Map a final score to its tier.
    #[must_use]
    pub const fn for_score(score: u32) -> Self {
        if score >= Self::EXCELLENT_MIN {
            ScoreTier::Excellent
        } else if score >= Self::GOOD_MIN {
            ScoreTier::Good
        } else if score >= Self::AVERAGE_MIN {
            ScoreTier::Average
        } else {
            ScoreTier::TryAgain
        }
    }

    /// Result message for this tier.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent! Lightning reflexes.",
            ScoreTier::Good => "Good job! You're quick.",
            ScoreTier::Average => "Not bad. Keep practicing.",
            ScoreTier::TryAgain => "Try again!",
        }
    }
}
