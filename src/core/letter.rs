//! Guessable letters
//!
//! A Letter is one of the 26 uppercase ASCII letters the player can pick.

use std::fmt;

/// Number of guessable letters
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Create a letter from a character
    ///
    /// Lowercase ASCII letters are normalized to uppercase. Returns `None` for
    /// anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('4').is_none());
    /// assert!(Letter::new('é').is_none());
    /// ```
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse a letter from user input
    ///
    /// Surrounding whitespace is ignored; exactly one ASCII letter must remain.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// Get the letter as an uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Alphabet index (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as u8 - b'A') as usize
    }

    /// All letters from A to Z
    pub fn all() -> impl Iterator<Item = Self> {
        ('A'..='Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
