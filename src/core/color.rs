//! Colors, game modes, and color sets.
//!
//! `Color` is pure identity: hue and label text live in the render layer
//! (`crate::render`). A `ColorSet` is the pool a round draws stimuli from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the six game colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// Every color, in button order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
            Color::Orange => "Orange",
        };
        f.write_str(name)
    }
}

/// Which rule decides the correct answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Answer with the swatch color shown.
    #[default]
    Normal,
    /// Answer with the color *named* by the label, ignoring the swatch.
    Stroop,
}

/// A set of distinct colors.
///
/// Insertion order is kept (it drives which index the random source maps
/// to), duplicates are dropped. At most six colors exist, so storage is
/// always inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorSet {
    colors: SmallVec<[Color; 6]>,
}

impl ColorSet {
    /// Create an empty set.
    ///
    /// `ColorSet::default()` is the full six-color set, not this.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: SmallVec::new(),
        }
    }

    /// The full six-color set.
    #[must_use]
    pub fn all() -> Self {
        Self::from_colors(Color::ALL)
    }

    /// Build a set from any sequence of colors, dropping duplicates.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut set = Self::empty();
        for color in colors {
            set.insert(color);
        }
        set
    }

    /// Add a color. Returns false if it was already present.
    pub fn insert(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Every color in the set except `excluded`.
    #[must_use]
    pub fn without(&self, excluded: Color) -> SmallVec<[Color; 6]> {
        self.colors.iter().copied().filter(|&c| c != excluded).collect()
    }
}

/// Defaults to every color, matching `RoundConfig::default()`.
impl Default for ColorSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        Self::from_colors(colors)
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.colors.into_vec()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::from_colors(iter)
    }
}
