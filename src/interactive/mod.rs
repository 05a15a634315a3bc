//! Interactive TUI interface
//!
//! A ratatui front-end: gallows, word, letter board and status line.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
