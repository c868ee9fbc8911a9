//! Guess evaluation
//!
//! Each slot of a checked guess receives one [`Mark`]:
//! - `Correct`: right color in the right slot
//! - `WrongPosition`: the color is in the solution, but elsewhere
//! - `WrongColor`: the color is not (or no longer) available in the solution
//!
//! Colors are treated as a multiset, so a color that appears once in the
//! solution never earns more than one positive mark.

use super::code::Code;
use super::color::COLS;

/// Per-slot evaluation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    WrongPosition,
    WrongColor,
}

impl Mark {
    /// Single-character marker used by the text renderers
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::WrongColor => '⬜',
        }
    }
}

/// Marks for a full row, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; COLS]);

impl Feedback {
    /// Every slot correct
    pub const PERFECT: Self = Self([Mark::Correct; COLS]);

    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. Count every color of the solution
    /// 2. First pass: exact matches are `Correct` and consume their color
    /// 3. Second pass: remaining slots are `WrongPosition` while their color
    ///    still has a count left (consuming it), `WrongColor` otherwise
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color::*, Feedback, Mark::*};
    ///
    /// let solution = Code::new([Red, Red, Blue, Green, Yellow]);
    /// let guess = Code::new([Red, Blue, Red, Red, Red]);
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &solution).marks(),
    ///     &[Correct, WrongPosition, WrongPosition, WrongColor, WrongColor]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, solution: &Code) -> Self {
        let mut marks = [Mark::WrongColor; COLS];
        let mut consumed = [false; COLS];
        let mut remaining = solution.color_counts();

        // First pass: exact matches
        for (i, (color, target)) in guess.colors().iter().zip(solution.colors()).enumerate() {
            if color == target {
                marks[i] = Mark::Correct;
                consumed[i] = true;
                if let Some(count) = remaining.get_mut(color) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, limited by what is left
        for (i, color) in guess.colors().iter().enumerate() {
            if consumed[i] {
                continue;
            }
            if let Some(count) = remaining.get_mut(color)
                && *count > 0
            {
                marks[i] = Mark::WrongPosition;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; COLS] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as a string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|mark| mark.symbol()).collect()
    }
}

/// Evaluate `guess` against `solution`; see [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(guess: &Code, solution: &Code) -> Feedback {
    Feedback::evaluate(guess, solution)
}
