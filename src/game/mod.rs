//! Game rules on top of the core types
//!
//! Configuration, the row state machine, the stopwatch and the rewards that
//! finished games earn.

pub mod config;
pub mod scoring;
pub mod state;
pub mod stopwatch;

pub use config::{Fingerprint, GameConfig, Mode};
pub use scoring::{RecordedOutcome, record_outcome, score_for_win};
pub use state::{GameState, Row, Status};
pub use stopwatch::Stopwatch;
