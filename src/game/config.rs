//! Game configuration and its persistence fingerprint

use crate::core::{COLS, Color};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_ROWS: usize = 1;
pub const MAX_ROWS: usize = 10;
pub const MAX_POLL_LENGTH: usize = Color::PALETTE.len();

/// Smallest poll allowed when codes may repeat colors
pub const MIN_POLL_WITH_DUPLICATES: usize = 2;

/// How finished games are rewarded
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Mode {
    /// No timer, no score
    #[default]
    Relax,
    /// Wins are timed; the fastest time is kept
    Stopwatch,
    /// Wins earn points; fewer rows used earns more
    Score,
}

impl Mode {
    /// Next mode in the Relax → Stopwatch → Score cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Relax => Self::Stopwatch,
            Self::Stopwatch => Self::Score,
            Self::Score => Self::Relax,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relax => "Relax",
            Self::Stopwatch => "Stopwatch",
            Self::Score => "Score",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Player settings
///
/// Persisted as JSON under the `settings` key. Missing fields fall back to
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub rows: usize,
    pub color_poll_length: usize,
    pub allow_duplicates: bool,
    pub mode: Mode,
    pub helper_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: MAX_ROWS,
            color_poll_length: 5,
            allow_duplicates: true,
            mode: Mode::Relax,
            helper_enabled: false,
        }
    }
}

impl GameConfig {
    /// Smallest poll that can fill a row under the duplicates policy
    #[must_use]
    pub const fn min_poll_length(allow_duplicates: bool) -> usize {
        if allow_duplicates {
            MIN_POLL_WITH_DUPLICATES
        } else {
            COLS
        }
    }

    /// Check that a game can be played with these settings
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` describing the first violated bound.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(GameError::InvalidConfig(format!(
                "rows must be between {MIN_ROWS} and {MAX_ROWS}, got {}",
                self.rows
            )));
        }

        let min_poll = Self::min_poll_length(self.allow_duplicates);
        if !(min_poll..=MAX_POLL_LENGTH).contains(&self.color_poll_length) {
            let policy = if self.allow_duplicates {
                "with duplicates"
            } else {
                "without duplicates"
            };
            return Err(GameError::InvalidConfig(format!(
                "color poll must be between {min_poll} and {MAX_POLL_LENGTH} {policy}, got {}",
                self.color_poll_length
            )));
        }

        Ok(())
    }

    /// Key under which best times and scores for these settings are stored
    #[must_use]
    pub const fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            rows: self.rows,
            color_poll_length: self.color_poll_length,
            allow_duplicates: self.allow_duplicates,
        }
    }
}

/// The settings that make two games comparable
///
/// Displays as `{rows}_{colorPollLength}_{DA|NoDA}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub rows: usize,
    pub color_poll_length: usize,
    pub allow_duplicates: bool,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duplicates = if self.allow_duplicates { "DA" } else { "NoDA" };
        write!(f, "{}_{}_{duplicates}", self.rows, self.color_poll_length)
    }
}
