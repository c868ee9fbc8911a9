//! Canonical color tokens and the per-game poll
//!
//! A [`Color`] is compared by identity only. Player-facing names come from
//! [`crate::i18n`], never from here.

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Number of slots in every row
pub const COLS: usize = 5;

/// One of the ten colors a code can be made of
///
/// The declaration order is the display order used for polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
    Brown,
    White,
}

impl Color {
    /// Every color, in display order
    pub const PALETTE: [Self; 10] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Pink,
        Self::Cyan,
        Self::Brown,
        Self::White,
    ];

    /// Canonical token, as accepted by [`Color::from_str`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
            Self::Brown => "brown",
            Self::White => "white",
        }
    }

    /// Terminal rendering color
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (220, 50, 47),
            Self::Blue => (38, 110, 230),
            Self::Green => (60, 180, 75),
            Self::Yellow => (245, 210, 40),
            Self::Purple => (145, 70, 200),
            Self::Orange => (245, 130, 48),
            Self::Pink => (240, 120, 190),
            Self::Cyan => (70, 210, 220),
            Self::Brown => (140, 90, 50),
            Self::White => (235, 235, 235),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Accepts a canonical name (any case) or a 1-based palette index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();

        if let Ok(index) = token.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::PALETTE.get(i).copied())
                .ok_or(GameError::UnknownColor(token));
        }

        Self::PALETTE
            .iter()
            .copied()
            .find(|color| color.name() == token)
            .ok_or(GameError::UnknownColor(token))
    }
}

/// The colors offered to the player in one game
///
/// Always duplicate-free and sorted in palette order, so the same set renders
/// the same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll(Vec<Color>);

impl Poll {
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut colors: Vec<Color> = colors.into_iter().collect();
        colors.sort_unstable();
        colors.dedup();
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Color at a 0-based position in display order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_sorted_and_unique() {
        let mut sorted = Color::PALETTE.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, Color::PALETTE.to_vec());
    }

    #[test]
    fn parse_by_name_ignores_case_and_whitespace() {
        assert_eq!(" Red ".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("CYAN".parse::<Color>().unwrap(), Color::Cyan);
    }

    #[test]
    fn parse_by_palette_index() {
        assert_eq!("1".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("10".parse::<Color>().unwrap(), Color::White);
        assert!("0".parse::<Color>().is_err());
        assert!("11".parse::<Color>().is_err());
    }

    #[test]
    fn parse_unknown_reports_token() {
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(GameError::UnknownColor("magenta".to_string()))
        );
    }

    #[test]
    fn poll_sorts_into_palette_order() {
        let poll = Poll::new([Color::White, Color::Red, Color::Cyan, Color::Red]);
        assert_eq!(poll.colors(), &[Color::Red, Color::Cyan, Color::White]);
        assert_eq!(poll.len(), 3);
        assert!(poll.contains(Color::Cyan));
        assert!(!poll.contains(Color::Blue));
        assert_eq!(poll.get(1), Some(Color::Cyan));
        assert_eq!(poll.get(3), None);
    }
}
