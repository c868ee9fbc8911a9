//! Mode-dependent rewards for finished games
//!
//! Only wins are rewarded:
//! - Stopwatch: the winning time replaces the stored best if strictly lower
//! - Score: `max(0, colorPollLength - winningRow)` points, full poll length
//!   for a first-row win
//! - Relax: nothing is recorded

use super::config::Mode;
use super::state::{GameState, Status};
use crate::error::GameError;
use crate::storage::records::{self, ScoreRecord};
use crate::storage::KeyValueStore;

/// Points for solving on the 0-based row `winning_row`
#[must_use]
pub fn score_for_win(color_poll_length: usize, winning_row: usize) -> u32 {
    let score = if winning_row == 0 {
        color_poll_length
    } else {
        color_poll_length.saturating_sub(winning_row)
    };
    u32::try_from(score).unwrap_or(u32::MAX)
}

/// What [`record_outcome`] did with a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedOutcome {
    /// Lost, unfinished, or a relax-mode game
    Nothing,
    NewBestTime {
        seconds: u64,
        previous: Option<u64>,
    },
    SlowerThanBest {
        seconds: u64,
        best: u64,
    },
    Scored {
        score: u32,
        record: ScoreRecord,
    },
    /// A win too late to earn points
    NoPoints,
}

/// Persist the reward for a finished game
///
/// # Errors
/// Returns `GameError::Storage` if the store cannot be written.
pub fn record_outcome<S: KeyValueStore + ?Sized>(
    store: &mut S,
    game: &GameState,
) -> Result<RecordedOutcome, GameError> {
    if game.status() != Status::Won {
        return Ok(RecordedOutcome::Nothing);
    }

    let config = game.config();
    let fingerprint = config.fingerprint();

    match config.mode {
        Mode::Relax => Ok(RecordedOutcome::Nothing),
        Mode::Stopwatch => {
            let seconds = game.stopwatch().elapsed_secs();
            let previous = records::load_best_time(store, fingerprint);
            if records::record_best_time(store, fingerprint, seconds)? {
                Ok(RecordedOutcome::NewBestTime { seconds, previous })
            } else {
                Ok(RecordedOutcome::SlowerThanBest {
                    seconds,
                    best: previous.unwrap_or(seconds),
                })
            }
        }
        Mode::Score => {
            let score = score_for_win(config.color_poll_length, game.active_row());
            match records::add_score(store, fingerprint, score)? {
                Some(record) => Ok(RecordedOutcome::Scored { score, record }),
                None => Ok(RecordedOutcome::NoPoints),
            }
        }
    }
}
