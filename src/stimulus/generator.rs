//! Stimulus generation.

use tracing::trace;

use super::pair::Stimulus;
use crate::core::config::validate_colors;
use crate::core::{Color, ColorSet, GameMode, RandomSource, Result};

/// Draws stimuli from a color set under the rules of a game mode.
///
/// Holds nothing but its random source: every call is independent, so
/// consecutive stimuli are uncorrelated apart from the Stroop rule within a
/// single stimulus.
#[derive(Clone, Debug)]
pub struct StimulusGenerator<R> {
    rng: R,
}

impl<R: RandomSource> StimulusGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the next stimulus.
    ///
    /// Normal: a uniform swatch color, echoed as the label.
    /// Stroop: a uniform swatch color, then a uniform label from the
    /// remaining colors.
    ///
    /// Fails with `InvalidConfiguration` if `colors` has fewer than two
    /// members, for either mode.
    pub fn next_stimulus(&mut self, mode: GameMode, colors: &ColorSet) -> Result<Stimulus> {
        validate_colors(colors)?;
        Ok(self.draw(mode, colors))
    }

    /// Draw from a set already known to hold at least two colors.
    pub(crate) fn draw(&mut self, mode: GameMode, colors: &ColorSet) -> Stimulus {
        let palette = colors.as_slice();
        let display = palette[self.rng.pick(palette.len())];

        let stimulus = match mode {
            GameMode::Normal => Stimulus::plain(display),
            GameMode::Stroop => {
                let others = colors.without(display);
                Stimulus::new(display, others[self.rng.pick(others.len())])
            }
        };

        trace!(?mode, display = %stimulus.display_color, label = %stimulus.label_color, "generated stimulus");
        stimulus
    }

    /// The color that answers `stimulus` correctly in `mode`.
    #[must_use]
    pub fn correct_answer(stimulus: &Stimulus, mode: GameMode) -> Color {
        stimulus.correct_answer(mode)
    }

    /// Borrow the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Consume the generator, returning its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
