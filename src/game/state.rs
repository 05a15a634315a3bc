//! Round state machine
//!
//! A `Game` owns its word source and the current round: the hidden word, the
//! reveal mask, the failure count and the round status. A round is either in
//! progress or over (won or lost); once over, guesses are ignored until the
//! next `start_round`.

use super::{GameError, WordSource};
use crate::core::{Letter, RevealMask, Word};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Misses that end a round
pub const MAX_FAILURES: u8 = 6;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// True for the terminal states
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In progress"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter found, word not complete yet
    Hit,
    /// Letter not found, tries remain
    Miss,
    /// Letter completed the word
    Won,
    /// Letter used up the last try
    Lost,
    /// Round already over; nothing changed
    AlreadyOver,
}

/// A hangman game: one word source and the round currently being played
#[derive(Debug)]
pub struct Game<S> {
    source: S,
    word: Word,
    revealed: RevealMask,
    failures: u8,
    status: Status,
}

impl<S: WordSource> Game<S> {
    /// Create a game and start its first round
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the source cannot supply a word.
    ///
    /// # Examples
    /// ```
    /// use hangman::game::{Game, GuessResult, ListSource, Status};
    /// use hangman::core::Letter;
    ///
    /// let source = ListSource::with_seed(vec!["apple".to_string()], 0).unwrap();
    /// let mut game = Game::new(source).unwrap();
    /// assert_eq!(game.current_display(), "A _ _ _ E");
    ///
    /// assert_eq!(game.guess(Letter::new('P').unwrap()), GuessResult::Hit);
    /// assert_eq!(game.guess(Letter::new('L').unwrap()), GuessResult::Won);
    /// assert_eq!(game.status(), Status::Won);
    /// ```
    #[instrument(skip(source))]
    pub fn new(mut source: S) -> Result<Self, GameError> {
        let word = source.pick()?;
        let revealed = RevealMask::initial(&word);

        let mut game = Self {
            source,
            word,
            revealed,
            failures: 0,
            status: Status::InProgress,
        };
        game.settle_opening();
        Ok(game)
    }

    /// Replace the current round with a fresh one
    ///
    /// On error the current round is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::SourceUnavailable` if the source cannot supply a word.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) -> Result<(), GameError> {
        let word = self.source.pick()?;

        self.revealed = RevealMask::initial(&word);
        self.word = word;
        self.failures = 0;
        self.status = Status::InProgress;
        self.settle_opening();
        Ok(())
    }

    // Words with nothing left to guess at the start are won outright.
    fn settle_opening(&mut self) {
        if self.revealed.is_complete() {
            self.status = Status::Won;
        }
        debug!(
            len = self.word.len(),
            hidden = self.revealed.hidden_count(),
            status = ?self.status,
            "round started"
        );
        trace!(word = %self.word, "answer");
    }

    /// Guess a letter
    ///
    /// Only interior positions are matched; the first and last characters are
    /// shown from the start. Repeating a guess is re-evaluated as-is: a repeated
    /// miss costs another try.
    #[instrument(skip_all, fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        if self.status.is_over() {
            debug!(status = ?self.status, "guess ignored");
            return GuessResult::AlreadyOver;
        }

        let mut found = false;
        for position in self.word.interior_positions_of(letter.as_char()) {
            self.revealed.reveal(position);
            found = true;
        }

        let result = if found {
            if self.revealed.is_complete() {
                self.status = Status::Won;
                GuessResult::Won
            } else {
                GuessResult::Hit
            }
        } else {
            self.failures += 1;
            if self.failures >= MAX_FAILURES {
                self.status = Status::Lost;
                self.revealed.reveal_all();
                GuessResult::Lost
            } else {
                GuessResult::Miss
            }
        };

        debug!(?result, failures = self.failures, "guess evaluated");
        result
    }

    /// Guess a character, validating it first
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGuessInput` for anything but an ASCII letter;
    /// the round is not changed.
    pub fn guess_char(&mut self, c: char) -> Result<GuessResult, GameError> {
        let letter = Letter::new(c).ok_or_else(|| GameError::invalid_guess(c))?;
        Ok(self.guess(letter))
    }
}

impl<S> Game<S> {
    /// The word as the player currently sees it
    #[must_use]
    pub fn current_display(&self) -> String {
        self.revealed.render(&self.word)
    }

    /// Current round status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// True once the round is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Misses so far this round (0..=6)
    #[inline]
    #[must_use]
    pub const fn failure_count(&self) -> u8 {
        self.failures
    }

    /// Misses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_tries(&self) -> u8 {
        MAX_FAILURES - self.failures
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Which positions are visible
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &RevealMask {
        &self.revealed
    }
}
