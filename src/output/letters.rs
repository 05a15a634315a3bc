//! Letter board
//!
//! Tracks which letters were used this round so front-ends can disable them.
//! The game itself re-evaluates repeated guesses; keeping the player from
//! repeating one is the front-end's job.

use crate::core::{ALPHABET_LEN, Letter};
use crate::game::GuessResult;

/// Letters shown per row
pub const LETTERS_PER_ROW: usize = 7;

/// How a letter has been used this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterState {
    #[default]
    Unused,
    Hit,
    Miss,
}

/// Per-letter usage for the current round
#[derive(Debug, Clone, Default)]
pub struct LetterBoard {
    states: [LetterState; ALPHABET_LEN],
}

impl LetterBoard {
    /// Board with every letter unused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a guess
    ///
    /// Ignored guesses (round already over) leave the board unchanged.
    pub fn record(&mut self, letter: Letter, result: GuessResult) {
        let state = match result {
            GuessResult::Hit | GuessResult::Won => LetterState::Hit,
            GuessResult::Miss | GuessResult::Lost => LetterState::Miss,
            GuessResult::AlreadyOver => return,
        };
        self.states[letter.index()] = state;
    }

    /// How a letter has been used this round
    #[must_use]
    pub fn state(&self, letter: Letter) -> LetterState {
        self.states[letter.index()]
    }

    /// Whether a letter was already guessed this round
    #[must_use]
    pub fn is_used(&self, letter: Letter) -> bool {
        self.state(letter) != LetterState::Unused
    }

    /// Number of letters used so far
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.states
            .iter()
            .filter(|&&s| s != LetterState::Unused)
            .count()
    }

    /// Re-enable every letter
    pub fn reset(&mut self) {
        self.states = [LetterState::Unused; ALPHABET_LEN];
    }

    /// The alphabet split into display rows
    #[must_use]
    pub fn rows() -> Vec<Vec<Letter>> {
        let letters: Vec<Letter> = Letter::all().collect();
        letters
            .chunks(LETTERS_PER_ROW)
            .map(<[Letter]>::to_vec)
            .collect()
    }
}
