//! Hangman - CLI
//!
//! Hangman with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    game::{Game, ListSource},
    logging::{self, LogTarget},
    wordlists::WORDS,
};
use tracing::{debug, instrument};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word order
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Build the word source selected by the -w flag
#[instrument]
fn load_source(wordlist: &str, seed: Option<u64>) -> Result<ListSource> {
    let source = match wordlist {
        "embedded" => ListSource::from_slice(WORDS, seed)?,
        path => ListSource::from_file(path, seed)
            .with_context(|| format!("loading word list from {path}"))?,
    };
    debug!(entries = source.len(), "word source ready");
    Ok(source)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI draws over stderr, so it logs to a file instead
    let target = match command {
        Commands::Play => LogTarget::tui(),
        Commands::Simple => LogTarget::Stderr,
    };
    logging::init(&target)?;

    let source = load_source(&cli.wordlist, cli.seed)?;
    let game = Game::new(source)?;

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple_command(game),
    }
}

fn run_simple_command(mut game: Game<ListSource>) -> Result<()> {
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(game: Game<ListSource>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
