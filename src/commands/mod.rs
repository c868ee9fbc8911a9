//! Command implementations

pub mod benchmark;
pub mod settings;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use settings::{SettingsUpdate, update_settings};
pub use simple::{parse_row, run_simple};
pub use stats::{StatsReport, collect_stats, reset_stats};
