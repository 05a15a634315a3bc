//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::core::Letter;
use crate::game::{Game, GameError, Status, WordSource};
use crate::output::{LetterBoard, guess_message, print_round, print_status};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be started.
pub fn run_simple<S: WordSource>(game: &mut Game<S>) -> Result<(), String> {
    let stdin = io::stdin();
    run_simple_with(game, stdin.lock())
}

/// Run the simple interactive CLI mode on any line source
///
/// Ends on `quit`/`exit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input fails or if a new round cannot be started.
pub fn run_simple_with<S: WordSource, R: BufRead>(
    game: &mut Game<S>,
    mut input: R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║               Hangman                ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time.");
    println!("Six wrong guesses and you're out!\n");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut board = LetterBoard::new();

    loop {
        print_round(game, &board);

        let prompt = if game.is_over() {
            "Type 'new' to play again or 'quit' to exit"
        } else {
            "Guess a letter"
        };
        let Some(line) = get_user_input(&mut input, prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.start_round().map_err(|e| e.to_string())?;
                board.reset();
                println!("\n🔄 New game started!");
            }
            _ => match Letter::parse(&line) {
                Some(letter) if board.is_used(letter) && !game.is_over() => {
                    print_status(
                        &format!("You already tried {letter}."),
                        Status::InProgress,
                    );
                }
                Some(letter) => {
                    let result = game.guess(letter);
                    board.record(letter, result);
                    debug!(%letter, ?result, "simple mode guess");
                    print_status(
                        &guess_message(result, game.remaining_tries()),
                        game.status(),
                    );
                }
                None => println!("❌ {}", GameError::invalid_guess(line)),
            },
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
