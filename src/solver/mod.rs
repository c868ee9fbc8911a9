//! Solving assistance
//!
//! Used by the in-game helper and by the benchmark command.

mod helper;

pub use helper::Helper;
