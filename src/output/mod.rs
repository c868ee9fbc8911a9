//! Terminal output formatting
//!
//! Display utilities for the text game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_feedback_row, print_game_over, print_poll, print_settings,
    print_stats,
};
