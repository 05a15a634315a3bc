//! Formatting utilities shared by the terminal front-ends

use crate::game::{GuessResult, MAX_FAILURES};

/// Gallows pictures, indexed by failure count
pub const GALLOWS: [&str; MAX_FAILURES as usize + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows picture for a failure count
///
/// Counts past the last stage show the last stage.
#[must_use]
pub fn gallows(failures: u8) -> &'static str {
    GALLOWS[usize::from(failures).min(GALLOWS.len() - 1)]
}

/// Status line shown after a guess
#[must_use]
pub fn guess_message(result: GuessResult, remaining_tries: u8) -> String {
    match result {
        GuessResult::Hit => "Good Guess!".to_string(),
        GuessResult::Miss => {
            let noun = if remaining_tries == 1 { "try" } else { "tries" };
            format!("Wrong! You have {remaining_tries} {noun} left.")
        }
        GuessResult::Won => "Game Over. You Win!".to_string(),
        GuessResult::Lost => "Game Over. You Lose!".to_string(),
        GuessResult::AlreadyOver => "Game Over. Start a new game to keep playing.".to_string(),
    }
}
