//! Core domain types for hangman
//!
//! Pure value types with no I/O: the word, the letters that can be guessed and
//! the mask of revealed positions.

mod letter;
mod reveal;
mod word;

pub use letter::{ALPHABET_LEN, Letter};
pub use reveal::{HIDDEN, RevealMask};
pub use word::{MIN_WORD_LEN, Word, WordError};
