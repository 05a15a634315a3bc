//! TUI rendering with ratatui
//!
//! Layout for the hangman interface.

use super::app::{App, MessageStyle};
use crate::game::Status;
use crate::output::{LetterBoard, LetterState, gallows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(3), // Message line
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and letters
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_play_area(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn status_color(status: Status) -> Color {
    match status {
        Status::InProgress => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = gallows(app.game.failure_count())
        .lines()
        .map(Line::from)
        .collect();

    let color = match app.game.failure_count() {
        0..=2 => Color::White,
        3..=4 => Color::Yellow,
        _ => Color::Red,
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Tries left: {} ", app.game.remaining_tries()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_play_area<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Min(6),    // Letters
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
}

fn render_word<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let status = app.game.status();
    let word = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.game.current_display(),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(word, area);
}

fn render_letters<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let round_over = app.game.is_over();

    let mut lines = vec![Line::from("")];
    for row in LetterBoard::rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for letter in row {
            let style = match app.board.state(letter) {
                LetterState::Hit => Style::default().fg(Color::Green),
                LetterState::Miss => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
                LetterState::Unused if round_over => Style::default().fg(Color::DarkGray),
                LetterState::Unused => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            };
            spans.push(Span::styled(format!("[{letter}]"), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let letters = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(letters, area);
}

fn render_message<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, color) = match &app.message {
        Some(msg) => {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (msg.text.as_str(), color)
        }
        None => ("Type a letter to guess.", Color::DarkGray),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Won: {} | Lost: {}",
        app.stats.games_won, app.stats.games_lost
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.game.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "A-Z: Guess | Ctrl-N/F2: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::game::{Game, ListSource};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(word: &str) -> App {
        let source = ListSource::with_seed(vec![word.to_string()], 0).unwrap();
        App::new(Game::new(source).unwrap())
    }

    #[test]
    fn renders_word_and_letters() {
        let app = app_with("apple");
        let screen = screen_text(&app);
        assert!(screen.contains("A _ _ _ E"));
        assert!(screen.contains("[A]"));
        assert!(screen.contains("[Z]"));
        assert!(screen.contains("Tries left: 6"));
    }

    #[test]
    fn renders_message_and_stats() {
        let mut app = app_with("apple");
        app.guess(Letter::new('P').unwrap());
        app.guess(Letter::new('L').unwrap());
        let screen = screen_text(&app);
        assert!(screen.contains("A P P L E"));
        assert!(screen.contains("Game Over. You Win!"));
        assert!(screen.contains("Won: 1 | Lost: 0"));
        assert!(screen.contains("Enter: New Game"));
    }
}
