//! Codes and guess rows
//!
//! A [`Code`] is a complete sequence of [`COLS`] colors (a solution or a
//! submitted guess). A [`Guess`] is the row being edited, where slots may
//! still be empty.

use super::color::{COLS, Color};
use crate::error::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A complete row of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; COLS]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; COLS]) -> Self {
        Self(colors)
    }

    /// Build a code from a slice
    ///
    /// # Errors
    /// Returns `GameError::CodeLength` unless the slice has exactly [`COLS`] colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self, GameError> {
        let colors: [Color; COLS] = colors
            .try_into()
            .map_err(|_| GameError::CodeLength(colors.len()))?;
        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; COLS] {
        &self.0
    }

    /// Multiset of the colors in this code
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct colors, in order of first appearance
    #[must_use]
    pub fn distinct_colors(&self) -> Vec<Color> {
        let mut distinct = Vec::with_capacity(COLS);
        for &color in &self.0 {
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }
        distinct
    }

    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.distinct_colors().len() < COLS
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// The row currently being filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guess([Option<Color>; COLS]);

impl Guess {
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; COLS] {
        &self.0
    }

    /// Color in a slot, `None` when unset or out of range
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied().flatten()
    }

    /// # Errors
    /// Returns `GameError::SlotOutOfRange` for an index past the last slot.
    pub(crate) fn set(&mut self, index: usize, color: Option<Color>) -> Result<(), GameError> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(GameError::SlotOutOfRange(index))?;
        *slot = color;
        Ok(())
    }

    #[must_use]
    pub fn unset_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unset_count() == 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unset_count() == COLS
    }

    #[must_use]
    pub fn first_unset(&self) -> Option<usize> {
        self.0.iter().position(Option::is_none)
    }

    /// Next unset slot after `index`, wrapping around to the start of the row
    #[must_use]
    pub fn next_unset_after(&self, index: usize) -> Option<usize> {
        (1..=COLS)
            .map(|offset| (index + offset) % COLS)
            .find(|&i| self.0[i].is_none())
    }

    /// Last slot holding a color
    #[must_use]
    pub fn last_set(&self) -> Option<usize> {
        self.0.iter().rposition(Option::is_some)
    }

    /// Convert a fully filled row into a code
    ///
    /// # Errors
    /// Returns `GameError::IncompleteGuess` if any slot is unset.
    pub fn to_code(&self) -> Result<Code, GameError> {
        let mut colors = [Color::Red; COLS];
        for (target, slot) in colors.iter_mut().zip(self.0) {
            *target = slot.ok_or(GameError::IncompleteGuess {
                unset: self.unset_count(),
            })?;
        }
        Ok(Code(colors))
    }
}

impl From<Code> for Guess {
    fn from(code: Code) -> Self {
        Self(code.0.map(Some))
    }
}
