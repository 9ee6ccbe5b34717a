//! Result screen data: score tiers, the high-score contract, summaries.

pub mod high_score;
pub mod summary;
pub mod tier;

pub use high_score::{HighScoreStore, InMemoryHighScore};
pub use summary::RoundSummary;
pub use tier::ScoreTier;
