//! Hangman word representation
//!
//! A Word stores an uppercase candidate along with letter position indices for guess matching.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest word a round can be played with
pub const MIN_WORD_LEN: usize = 2;

/// An uppercase hangman word with letter position tracking
///
/// Length is counted in characters, not bytes. Non-letter characters (spaces,
/// hyphens, apostrophes) are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// Nothing left after trimming
    #[display("Word is empty")]
    Empty,
    /// Fewer than [`MIN_WORD_LEN`] characters
    #[display("Word must be at least 2 characters, got {len}")]
    TooShort { len: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing remains after trimming
    /// - Fewer than two characters remain
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let chars: Vec<char> = text.chars().collect();
        match chars.len() {
            0 => return Err(WordError::Empty),
            len if len < MIN_WORD_LEN => return Err(WordError::TooShort { len }),
            _ => {}
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get all positions where a character appears
    ///
    /// Returns an empty slice if the character doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Positions of a character strictly between the first and last index
    ///
    /// These are the only positions a guess can uncover.
    pub fn interior_positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        let last = self.len() - 1;
        self.positions_of(letter)
            .iter()
            .copied()
            .filter(move |&i| i > 0 && i < last)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
