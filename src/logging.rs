//! Log subscriber setup
//!
//! The TUI owns the terminal, so its logs go to a file; line mode logs to stderr.
//! `RUST_LOG` selects what is logged, `warn` otherwise.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Log file written while the TUI is running
pub const TUI_LOG_FILE: &str = "hangman_tui.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Target for the TUI: [`TUI_LOG_FILE`] in the working directory
    #[must_use]
    pub fn tui() -> Self {
        Self::File(PathBuf::from(TUI_LOG_FILE))
    }
}

/// Build a subscriber writing to `target`
///
/// Colors are only used on stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn subscriber(
    target: &LogTarget,
    filter: EnvFilter,
) -> io::Result<impl Subscriber + Send + Sync + 'static> {
    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogTarget::File(path) => (BoxMakeWriter::new(Arc::new(File::create(path)?)), false),
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish())
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already set.
pub fn init(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = subscriber(target, filter)
        .with_context(|| format!("creating log output {target:?}"))?;
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(())
}
