//! Word list loading utilities
//!
//! Provides functions to load candidate entries from files or from embedded constants.
//! Entries are kept as raw strings: rejecting entries that are too short is the
//! picker's job, not the loader's.

use std::fs;
use std::io;
use std::path::Path;

/// Load newline-delimited entries from a file
///
/// Each line is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_lines(&content))
}

/// Split text into trimmed, non-blank entries
#[must_use]
pub fn entries_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to owned entries
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::entries_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let entries = entries_from_slice(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
