//! Terminal output formatting
//!
//! Gallows pictures, status lines and the letter board shared by the TUI and
//! the line-based mode.

pub mod display;
pub mod formatters;
pub mod letters;

pub use display::{print_round, print_status};
pub use formatters::{gallows, guess_message};
pub use letters::{LetterBoard, LetterState};
