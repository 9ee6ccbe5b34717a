//! The stimulus shown to the player.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameMode};

/// A swatch color paired with a named label color.
///
/// In Normal mode both are equal and the label is unused. In Stroop mode
/// they always differ. A stimulus is never mutated; the engine replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stimulus {
    /// Color of the swatch.
    pub display_color: Color,
    /// Color whose name is printed on the swatch.
    pub label_color: Color,
}

impl Stimulus {
    /// Create a stimulus from its two colors.
    #[must_use]
    pub const fn new(display_color: Color, label_color: Color) -> Self {
        Self {
            display_color,
            label_color,
        }
    }

    /// A Normal-mode stimulus: label mirrors the swatch.
    #[must_use]
    pub const fn plain(color: Color) -> Self {
        Self::new(color, color)
    }

    /// The button that scores a point for this stimulus.
    #[must_use]
    pub const fn correct_answer(&self, mode: GameMode) -> Color {
        match mode {
            GameMode::Normal => self.display_color,
            GameMode::Stroop => self.label_color,
        }
    }

    /// Whether the colors satisfy the pairing rule for `mode`.
    #[must_use]
    pub fn is_valid_for(&self, mode: GameMode) -> bool {
        match mode {
            GameMode::Normal => self.label_color == self.display_color,
            GameMode::Stroop => self.label_color != self.display_color,
        }
    }
}
