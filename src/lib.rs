//! Hangman
//!
//! A word-guessing game: guess the hidden word one letter at a time before the
//! gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Letter;
//! use hangman::game::{Game, GuessResult, ListSource};
//!
//! let source = ListSource::with_seed(vec!["lantern".to_string()], 0).unwrap();
//! let mut game = Game::new(source).unwrap();
//! println!("{}", game.current_display()); // L _ _ _ _ _ N
//!
//! let result = game.guess(Letter::new('a').unwrap());
//! assert_eq!(result, GuessResult::Hit);
//! ```

// Core domain types
pub mod core;

// Round state machine and word sources
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
