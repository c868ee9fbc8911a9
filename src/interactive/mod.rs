//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, HintInfo, Message, MessageStyle, run_tui};
