//! Core domain types for the game
//!
//! Colors, codes, feedback and puzzle generation. Nothing here knows about
//! rows, modes or persistence.

mod code;
mod color;
mod feedback;
pub mod generator;

pub use code::{Code, Guess};
pub use color::{COLS, Color, Poll};
pub use feedback::{Feedback, Mark, evaluate};
