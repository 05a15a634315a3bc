//! Colored terminal output for the line-based mode

use super::formatters::gallows;
use super::letters::{LetterBoard, LetterState};
use crate::game::{Game, Status};
use colored::{ColoredString, Colorize};

/// Color the word display by round status
#[must_use]
pub fn styled_display(display: &str, status: Status) -> ColoredString {
    match status {
        Status::InProgress => display.bright_white().bold(),
        Status::Won => display.green().bold(),
        Status::Lost => display.red().bold(),
    }
}

/// Render the letter board, one row per line
///
/// Used letters are dimmed; every letter is dimmed once the round is over.
#[must_use]
pub fn styled_letters(board: &LetterBoard, round_over: bool) -> Vec<String> {
    LetterBoard::rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&letter| {
                    let text = letter.to_string();
                    match board.state(letter) {
                        LetterState::Hit => text.green().to_string(),
                        LetterState::Miss => text.red().strikethrough().to_string(),
                        LetterState::Unused if round_over => text.bright_black().to_string(),
                        LetterState::Unused => text.bright_white().bold().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Print the gallows, the word and the letter board
pub fn print_round<S>(game: &Game<S>, board: &LetterBoard) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", gallows(game.failure_count()));
    println!();
    println!(
        "   {}",
        styled_display(&game.current_display(), game.status())
    );
    println!();
    for line in styled_letters(board, game.is_over()) {
        println!("   {line}");
    }
    println!(
        "\n   Tries left: {}",
        game.remaining_tries().to_string().bright_yellow()
    );
}

/// Print a status line
pub fn print_status(message: &str, status: Status) {
    let line = match status {
        Status::InProgress => message.bright_cyan(),
        Status::Won => message.green().bold(),
        Status::Lost => message.red().bold(),
    };
    println!("{line}");
}
