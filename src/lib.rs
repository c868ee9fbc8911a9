//! Mastermind
//!
//! A code-breaking game: find the hidden row of five colors drawn from a
//! per-game poll, guided by per-slot feedback. Includes a terminal UI, a
//! line-based text mode, persisted best times and scores, and an optional
//! solving helper.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{Code, Color::*, Feedback};
//!
//! let solution = Code::new([Red, Red, Blue, Green, Yellow]);
//! let guess = Code::new([Red, Blue, Red, Red, Red]);
//!
//! let feedback = Feedback::evaluate(&guess, &solution);
//! println!("Feedback: {}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Shared error type
pub mod error;

// Game rules, modes and timing
pub mod game;

// Settings and record persistence
pub mod storage;

// Solving helper
pub mod solver;

// Display translations
pub mod i18n;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
