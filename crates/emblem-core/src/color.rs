use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Color tag of an emblem.
///
/// An emblem carries one or two colors. Collecting several emblems of the same
/// color unlocks a set bonus; the thresholds depend on the [`ColorFamily`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Brown = 2,
    Gray = 3,
    Green = 4,
    Navy = 5,
    Pink = 6,
    Purple = 7,
    Red = 8,
    White = 9,
    Yellow = 10,
}

impl Color {
    /// Number of colors (11).
    pub const LEN: usize = 11;

    pub const ALL: [Color; Self::LEN] = [
        Color::Black,
        Color::Blue,
        Color::Brown,
        Color::Gray,
        Color::Green,
        Color::Navy,
        Color::Pink,
        Color::Purple,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    #[must_use]
    pub const fn family(self) -> ColorFamily {
        match self {
            Color::Green | Color::Blue | Color::White | Color::Brown | Color::Purple => {
                ColorFamily::Cool
            }
            Color::Red | Color::Yellow | Color::Pink | Color::Navy | Color::Black | Color::Gray => {
                ColorFamily::Warm
            }
        }
    }
}

/// Group of colors sharing the same set-bonus thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFamily {
    /// Green, Blue, White, Brown, Purple: bonus tiers at 2, 4 and 6 emblems.
    Cool,
    /// Red, Yellow, Pink, Navy, Black, Gray: bonus tiers at 3, 5 and 7 emblems.
    Warm,
}

impl ColorFamily {
    /// Minimum color count for each bonus tier (1, 2, 3).
    #[must_use]
    pub const fn thresholds(self) -> [u32; 3] {
        match self {
            ColorFamily::Cool => [2, 4, 6],
            ColorFamily::Warm => [3, 5, 7],
        }
    }

    /// Returns the set-bonus tier (0 to 3) reached by `count` emblems of one color.
    #[must_use]
    pub fn bonus_tier(self, count: u32) -> u32 {
        self.thresholds()
            .into_iter()
            .map(|threshold| u32::from(count >= threshold))
            .sum()
    }
}

/// Number of occurrences of each color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorCounts([u32; Color::LEN]);

impl ColorCounts {
    /// Counts every color in `colors`.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        let mut counts = Self::default();
        for color in colors {
            counts.0[color as usize] += 1;
        }
        counts
    }

    /// Returns the set-bonus tier reached by `color`.
    #[must_use]
    pub fn bonus_tier(&self, color: Color) -> u32 {
        color.family().bonus_tier(self[color])
    }
}

impl Index<Color> for ColorCounts {
    type Output = u32;

    fn index(&self, color: Color) -> &Self::Output {
        &self.0[color as usize]
    }
}
