//! # color-rush
//!
//! Round engine for a color reaction game.
//!
//! A timed round shows a color stimulus, the player taps a color button,
//! and correct taps score. In Stroop mode the swatch color and the printed
//! color name disagree, and only the *named* color scores.
//!
//! ## Design Principles
//!
//! 1. **Host-driven**: No timers or threads. The host reports elapsed time
//!    via `tick` and forwards taps via `submit_answer`.
//!
//! 2. **Injected randomness**: Stimuli come from a `RandomSource`, so a
//!    seeded `GameRng` or a `ScriptedSource` replays a round exactly.
//!
//! 3. **Late input is harmless**: Answers and ticks outside a running round
//!    are ignored. The only error is a malformed configuration at start.
//!
//! ## Modules
//!
//! - `core`: Colors, modes, color sets, RNG, configuration, errors
//! - `stimulus`: Stimulus pairs and their generator
//! - `round`: Round state, events, and the `RoundEngine`
//! - `results`: Score tiers, high-score contract, round summaries
//! - `render`: Color and stimulus render directives

pub mod core;
pub mod stimulus;
pub mod round;
pub mod results;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorSet, GameMode,
    GameRng, GameRngState, RandomSource, ScriptedSource,
    RoundConfig, DEFAULT_DURATION_MS, DEFAULT_TICK_INTERVAL_MS,
    ConfigIssue, GameError, Result,
};

pub use crate::stimulus::{Stimulus, StimulusGenerator};

pub use crate::round::{AnswerOutcome, Phase, RenderSink, RoundEngine, RoundEvent, RoundView};

pub use crate::results::{HighScoreStore, InMemoryHighScore, RoundSummary, ScoreTier};

pub use crate::render::{ColorDirective, StimulusDirective};
