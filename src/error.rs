//! Error type shared by the game core, the stores and the commands

use crate::core::Color;
use std::fmt;

/// Everything that can go wrong while playing or persisting a game
///
/// All variants are recoverable: they either describe input the player has to
/// correct, or state the stores replace with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted while `unset` slots were still empty
    IncompleteGuess { unset: usize },
    /// Settings that cannot produce a playable game
    InvalidConfig(String),
    /// A persisted value could not be decoded
    MalformedPersistedState { key: String },
    /// The game already ended in a win or a loss
    GameOver,
    /// Only the active row accepts input
    InactiveRow { row: usize, active: usize },
    SlotOutOfRange(usize),
    ColorNotInPoll(Color),
    NoSlotSelected,
    UnknownColor(String),
    /// A code was built from the wrong number of colors
    CodeLength(usize),
    Storage(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { unset } => {
                write!(f, "Select a color for every slot first ({unset} still empty)")
            }
            Self::InvalidConfig(reason) => write!(f, "Invalid settings: {reason}"),
            Self::MalformedPersistedState { key } => {
                write!(f, "Stored value for '{key}' is malformed")
            }
            Self::GameOver => write!(f, "The game is over, start a new one"),
            Self::InactiveRow { row, active } => {
                write!(f, "Row {} is not active (active row is {})", row + 1, active + 1)
            }
            Self::SlotOutOfRange(slot) => write!(f, "There is no slot {}", slot + 1),
            Self::ColorNotInPoll(color) => write!(f, "{color} is not available in this game"),
            Self::NoSlotSelected => write!(f, "No slot selected"),
            Self::UnknownColor(token) => write!(f, "Unknown color '{token}'"),
            Self::CodeLength(len) => {
                write!(f, "A code needs exactly {} colors, got {len}", crate::core::COLS)
            }
            Self::Storage(reason) => write!(f, "Could not save: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_one_based_positions() {
        let err = GameError::InactiveRow { row: 0, active: 2 };
        assert_eq!(err.to_string(), "Row 1 is not active (active row is 3)");
        assert_eq!(GameError::SlotOutOfRange(5).to_string(), "There is no slot 6");
    }

    #[test]
    fn display_incomplete_guess_counts_unset() {
        let err = GameError::IncompleteGuess { unset: 2 };
        assert!(err.to_string().contains("2 still empty"));
    }
}
