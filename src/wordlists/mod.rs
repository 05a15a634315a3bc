//! Word lists for hangman
//!
//! Provides the default word list compiled into the binary, plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
