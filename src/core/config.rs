//! Round configuration.
//!
//! Hosts build a `RoundConfig` (or load one from JSON) and hand it to
//! `RoundEngine::start_with`. `tick_interval_ms` is advisory: the host
//! decides how often to call `tick`, the engine only sees elapsed time.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorSet, GameMode};
use super::error::{ConfigIssue, GameError, Result};

/// Default round length: 30 seconds.
pub const DEFAULT_DURATION_MS: u64 = 30_000;

/// Default host tick cadence: once per second.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Configuration for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Answer rule for the round.
    pub mode: GameMode,

    /// Total round length in milliseconds. Must be non-zero.
    pub duration_ms: u64,

    /// How often the host is expected to call `tick` (not enforced).
    pub tick_interval_ms: u64,

    /// Colors stimuli are drawn from. Needs at least two.
    pub colors: ColorSet,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            duration_ms: DEFAULT_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            colors: ColorSet::all(),
        }
    }
}

impl RoundConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the round duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the expected tick cadence.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Restrict the colors stimuli are drawn from.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = ColorSet::from_colors(colors);
        self
    }

    /// Check the round preconditions.
    pub fn validate(&self) -> Result<()> {
        validate_round(self.duration_ms, &self.colors)
    }
}

/// Duration and color-set preconditions shared by `RoundConfig::validate`
/// and `RoundEngine::start`.
pub(crate) fn validate_round(duration_ms: u64, colors: &ColorSet) -> Result<()> {
    if duration_ms == 0 {
        return Err(GameError::InvalidConfiguration(ConfigIssue::ZeroDuration));
    }
    validate_colors(colors)
}

/// A color set must hold two distinct colors so a Stroop label can always
/// differ from its swatch.
pub(crate) fn validate_colors(colors: &ColorSet) -> Result<()> {
    if colors.len() < 2 {
        return Err(GameError::InvalidConfiguration(ConfigIssue::TooFewColors {
            distinct: colors.len(),
        }));
    }
    Ok(())
}
