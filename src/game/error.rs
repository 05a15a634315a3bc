//! Game error types

use derive_more::{Display, Error};

/// Errors surfaced by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The word list is missing, unreadable or holds nothing playable
    #[display("Word list unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A guess that is not exactly one ASCII letter
    #[display("Invalid guess {input:?}: expected a single letter A-Z")]
    InvalidGuessInput { input: String },
}

impl GameError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_guess(input: impl Into<String>) -> Self {
        Self::InvalidGuessInput {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            GameError::unavailable("word list is empty").to_string(),
            "Word list unavailable: word list is empty"
        );
        assert_eq!(
            GameError::invalid_guess("7").to_string(),
            "Invalid guess \"7\": expected a single letter A-Z"
        );
    }
}
