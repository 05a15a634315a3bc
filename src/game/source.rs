//! Word sources
//!
//! Defines the `WordSource` trait and the list-backed implementation.

use super::GameError;
use crate::core::Word;
use crate::wordlists::loader::{entries_from_slice, load_from_file};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, instrument};

/// Supplies the word for each new round
pub trait WordSource {
    /// Pick the next word
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if no word can be produced.
    fn pick(&mut self) -> Result<Word, GameError>;
}

/// Picks uniformly at random from a fixed list of entries
///
/// Entries shorter than two characters stay in the list; a pick that lands on
/// one is simply retried. Construction guarantees at least one usable entry,
/// so the retry loop terminates.
#[derive(Debug, Clone)]
pub struct ListSource<R = StdRng> {
    entries: Vec<String>,
    rng: R,
}

impl ListSource<StdRng> {
    /// Create a source seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the list holds no usable entry.
    pub fn new(entries: Vec<String>) -> Result<Self, GameError> {
        Self::with_rng(entries, StdRng::from_os_rng())
    }

    /// Create a source with a fixed seed, for reproducible word order
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the list holds no usable entry.
    ///
    /// # Examples
    /// ```
    /// use hangman::game::{ListSource, WordSource};
    ///
    /// let mut source = ListSource::with_seed(vec!["lantern".to_string()], 7).unwrap();
    /// assert_eq!(source.pick().unwrap().text(), "LANTERN");
    /// ```
    pub fn with_seed(entries: Vec<String>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(entries, StdRng::seed_from_u64(seed))
    }

    /// Create a source from a string slice, such as the embedded word list
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the list holds no usable entry.
    pub fn from_slice(slice: &[&str], seed: Option<u64>) -> Result<Self, GameError> {
        let entries = entries_from_slice(slice);
        match seed {
            Some(seed) => Self::with_seed(entries, seed),
            None => Self::new(entries),
        }
    }

    /// Create a source from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the file cannot be read or
    /// holds no usable entry.
    pub fn from_file(path: impl AsRef<Path>, seed: Option<u64>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let entries = load_from_file(path)
            .map_err(|e| GameError::unavailable(format!("cannot read {}: {e}", path.display())))?;
        match seed {
            Some(seed) => Self::with_seed(entries, seed),
            None => Self::new(entries),
        }
    }
}

impl<R: Rng> ListSource<R> {
    /// Create a source driven by the given random number generator
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the list is empty or every
    /// entry is shorter than two characters.
    pub fn with_rng(entries: Vec<String>, rng: R) -> Result<Self, GameError> {
        if entries.is_empty() {
            return Err(GameError::unavailable("word list is empty"));
        }
        if !entries.iter().any(|entry| Word::new(entry).is_ok()) {
            return Err(GameError::unavailable(
                "word list has no entry of at least 2 characters",
            ));
        }

        Ok(Self { entries, rng })
    }

    /// Number of entries, usable or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Rng> WordSource for ListSource<R> {
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    fn pick(&mut self) -> Result<Word, GameError> {
        loop {
            let entry = self
                .entries
                .choose(&mut self.rng)
                .ok_or_else(|| GameError::unavailable("word list is empty"))?;

            match Word::new(entry) {
                Ok(word) => return Ok(word),
                Err(e) => debug!(entry = %entry, error = %e, "skipping unusable entry"),
            }
        }
    }
}
