//! Render directives for colors and stimuli.

use serde::Serialize;

use crate::core::{Color, GameMode};
use crate::stimulus::Stimulus;

/// Text printed on the swatch in Normal mode, where the label is unused.
pub const NORMAL_PROMPT: &str = "Tap this color";

/// How to draw one color: fill and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorDirective {
    pub color: Color,
    /// sRGB fill.
    pub rgb: [u8; 3],
    /// Name printed on buttons and Stroop swatches.
    pub label: &'static str,
}

impl ColorDirective {
    /// Fill as `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Color {
    /// Render directive for this color.
    #[must_use]
    pub const fn directive(self) -> ColorDirective {
        let (rgb, label) = match self {
            Color::Red => ([0xe5, 0x39, 0x35], "RED"),
            Color::Green => ([0x43, 0xa0, 0x47], "GREEN"),
            Color::Blue => ([0x1e, 0x88, 0xe5], "BLUE"),
            Color::Yellow => ([0xfd, 0xd8, 0x35], "YELLOW"),
            Color::Purple => ([0x8e, 0x24, 0xaa], "PURPLE"),
            Color::Orange => ([0xfb, 0x8c, 0x00], "ORANGE"),
        };
        ColorDirective {
            color: self,
            rgb,
            label,
        }
    }
}

/// How to draw the stimulus card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StimulusDirective {
    /// Card fill.
    pub swatch: ColorDirective,
    /// Text printed on the card.
    pub text: &'static str,
}

impl StimulusDirective {
    /// Directive for `stimulus` under `mode`.
    ///
    /// Stroop cards carry the label color's name over the swatch fill.
    /// Normal cards carry a fixed prompt.
    #[must_use]
    pub fn for_stimulus(stimulus: &Stimulus, mode: GameMode) -> Self {
        let text = match mode {
            GameMode::Normal => NORMAL_PROMPT,
            GameMode::Stroop => stimulus.label_color.directive().label,
        };
        Self {
            swatch: stimulus.display_color.directive(),
            text,
        }
    }
}
