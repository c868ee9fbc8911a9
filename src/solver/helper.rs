//! Solving helper
//!
//! Keeps every code that could still be the solution given the feedback seen
//! so far, and suggests one of them.

use crate::core::{COLS, Code, Color, Feedback, Poll};
use crate::game::GameState;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// Candidate codes for one poll
pub struct Helper {
    codes: Vec<Code>,
}

impl Helper {
    /// Enumerate every code the poll can form
    ///
    /// Without duplicates only codes with five distinct colors are kept.
    #[must_use]
    pub fn new(poll: &Poll, allow_duplicates: bool) -> Self {
        let colors = poll.colors();
        if colors.is_empty() {
            return Self { codes: Vec::new() };
        }

        let total = colors.len().pow(COLS as u32);
        let mut codes = Vec::with_capacity(total);
        let mut digits = [0usize; COLS];

        for _ in 0..total {
            let code = Code::new(digits.map(|d| colors[d]));
            if allow_duplicates || !code.has_duplicates() {
                codes.push(code);
            }

            // Odometer increment, least significant slot last
            for digit in digits.iter_mut().rev() {
                *digit += 1;
                if *digit < colors.len() {
                    break;
                }
                *digit = 0;
            }
        }

        Self { codes }
    }

    /// Helper for the poll and duplicates policy of `game`
    #[must_use]
    pub fn for_game(game: &GameState) -> Self {
        Self::new(game.poll(), game.config().allow_duplicates)
    }

    /// Codes that would have produced exactly the observed feedback
    #[must_use]
    pub fn candidates(&self, history: &[(Code, Feedback)]) -> Vec<&Code> {
        self.codes
            .par_iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Feedback::evaluate(guess, candidate) == *observed)
            })
            .collect()
    }

    #[must_use]
    pub fn count_candidates(&self, history: &[(Code, Feedback)]) -> usize {
        self.candidates(history).len()
    }

    /// A random code still consistent with `history`
    ///
    /// Returns `None` if the history contradicts every code.
    pub fn suggest<R: Rng>(&self, history: &[(Code, Feedback)], rng: &mut R) -> Option<Code> {
        self.candidates(history).choose(rng).map(|&&code| code)
    }

    /// Whether `color` appears in any remaining candidate
    #[must_use]
    pub fn color_possible(&self, history: &[(Code, Feedback)], color: Color) -> bool {
        self.candidates(history)
            .iter()
            .any(|code| code.colors().contains(&color))
    }

    /// Colors of `poll` that no remaining candidate uses
    #[must_use]
    pub fn ruled_out(&self, poll: &Poll, history: &[(Code, Feedback)]) -> Vec<Color> {
        poll.colors()
            .iter()
            .copied()
            .filter(|&color| !self.color_possible(history, color))
            .collect()
    }
}
