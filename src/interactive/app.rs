//! TUI application state and logic

use crate::core::Letter;
use crate::game::{Game, GuessResult, ListSource, Status, WordSource};
use crate::output::{LetterBoard, guess_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Application state
pub struct App<S = ListSource> {
    pub game: Game<S>,
    pub board: LetterBoard,
    pub message: Option<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for this session only; nothing is saved
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub games_lost: usize,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(game: Game<S>) -> Self {
        let mut app = Self {
            game,
            board: LetterBoard::new(),
            message: None,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.note_free_win();
        app
    }

    /// Guess a letter unless it was already used this round
    pub fn guess(&mut self, letter: Letter) {
        if self.game.is_over() {
            self.set_message(
                "Game Over. Press Enter for a new game.",
                MessageStyle::Info,
            );
            return;
        }
        if self.board.is_used(letter) {
            self.set_message(&format!("You already tried {letter}."), MessageStyle::Info);
            return;
        }

        let result = self.game.guess(letter);
        self.board.record(letter, result);
        debug!(%letter, ?result, "tui guess");

        let style = match result {
            GuessResult::Hit | GuessResult::Won => MessageStyle::Success,
            GuessResult::Miss | GuessResult::Lost => MessageStyle::Error,
            GuessResult::AlreadyOver => MessageStyle::Info,
        };
        match result {
            GuessResult::Won => self.stats.games_won += 1,
            GuessResult::Lost => self.stats.games_lost += 1,
            _ => {}
        }

        let text = guess_message(result, self.game.remaining_tries());
        self.set_message(&text, style);
    }

    /// Replace the round and re-enable every letter
    pub fn new_game(&mut self) {
        match self.game.start_round() {
            Ok(()) => {
                self.board.reset();
                self.message = None;
                self.note_free_win();
            }
            Err(e) => {
                warn!(error = %e, "could not start a new round");
                self.set_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    // Rounds that open already complete count as wins.
    fn note_free_win(&mut self) {
        if self.game.status() == Status::Won {
            self.stats.games_won += 1;
            self.set_message("Game Over. You Win!", MessageStyle::Success);
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.new_game(),
            KeyCode::Enter if self.game.is_over() => self.new_game(),
            KeyCode::Char(c) if !ctrl => match Letter::new(c) {
                Some(letter) => self.guess(letter),
                None => self.set_message(
                    &format!("'{c}' is not a letter. Pick A-Z."),
                    MessageStyle::Error,
                ),
            },
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameError;

    fn app_with(words: &[&str]) -> App {
        let entries = words.iter().map(|w| (*w).to_string()).collect();
        App::new(Game::new(ListSource::with_seed(entries, 0).unwrap()).unwrap())
    }

    fn press(app: &mut App<impl WordSource>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn message_text<S>(app: &App<S>) -> &str {
        app.message.as_ref().map_or("", |m| m.text.as_str())
    }

    #[test]
    fn letter_keys_guess() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.game.current_display(), "A P P _ E");
        assert_eq!(message_text(&app), "Good Guess!");
        assert!(app.board.is_used(Letter::new('P').unwrap()));
    }

    #[test]
    fn miss_reports_tries_left() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(message_text(&app), "Wrong! You have 5 tries left.");
        assert_eq!(app.message.as_ref().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn used_letter_is_disabled() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('Z'));
        assert_eq!(app.game.failure_count(), 1);
        assert_eq!(message_text(&app), "You already tried Z.");
    }

    #[test]
    fn non_letter_key_is_rejected() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.failure_count(), 0);
        assert_eq!(
            app.message.as_ref().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn win_is_counted_and_letters_lock() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.game.status(), Status::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(message_text(&app), "Game Over. You Win!");

        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.game.failure_count(), 0);
        assert!(!app.board.is_used(Letter::new('Z').unwrap()));
    }

    #[test]
    fn loss_is_counted_and_shows_word() {
        let mut app = app_with(&["apple"]);
        for c in ['q', 'z', 'x', 'j', 'k', 'v'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.status(), Status::Lost);
        assert_eq!(app.stats.games_lost, 1);
        assert_eq!(message_text(&app), "Game Over. You Lose!");
        assert_eq!(app.game.current_display(), "A P P L E");
    }

    #[test]
    fn enter_starts_new_game_only_when_over() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.failure_count(), 1);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.status(), Status::InProgress);
        assert_eq!(app.game.failure_count(), 0);
        assert_eq!(app.board.used_count(), 0);
        assert!(app.message.is_none());
    }

    #[test]
    fn ctrl_n_and_f2_start_new_game_any_time() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Char('z'));
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.game.failure_count(), 0);

        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.game.failure_count(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(&["apple"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(&["apple"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn two_letter_word_counts_as_free_win() {
        let app = app_with(&["go"]);
        assert_eq!(app.game.status(), Status::Won);
        assert_eq!(app.stats.games_won, 1);
    }

    /// Source that works once, then fails
    struct OneShot(Option<&'static str>);

    impl WordSource for OneShot {
        fn pick(&mut self) -> Result<Word, GameError> {
            let text = self
                .0
                .take()
                .ok_or_else(|| GameError::unavailable("gone"))?;
            Word::new(text).map_err(|e| GameError::unavailable(e.to_string()))
        }
    }

    #[test]
    fn failed_new_game_shows_error() {
        let mut app = App::new(Game::new(OneShot(Some("apple"))).unwrap());
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.game.current_display(), "A P P _ E");
        assert_eq!(message_text(&app), "Word list unavailable: gone");
    }
}
