//! Logging initialization for the deck presenter.
//!
//! Configures the `tracing` subscriber with level filtering via the `DECK_LOG`
//! environment variable. Falls back to the configured `[logging] level`.
//!
//! # Usage
//!
//! ```bash
//! # Debug level, written to a file so it does not draw over the slides
//! DECK_LOG=debug deck present talk.toml
//!
//! # Module-specific filtering
//! DECK_LOG=pitch_deck::presentation=debug,warn deck present
//! ```

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::{LogLevel, LoggingConfig};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "DECK_LOG";

/// Initialize the tracing subscriber.
///
/// Reads `DECK_LOG` for filter directives, falling back to the level chosen by
/// [`default_directive`]. Output goes to `config.file` when set (appending,
/// no ANSI colors), otherwise to stderr.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init(config: &LoggingConfig, presenting: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, presenting)));

    let installed = match config.file_path() {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

/// Fallback filter directive when `DECK_LOG` is unset.
///
/// While presenting without a log file, stderr shares the screen with the
/// slides, so anything below `warn` is suppressed.
pub fn default_directive(config: &LoggingConfig, presenting: bool) -> &'static str {
    if presenting && config.file_path().is_none() {
        match config.level {
            LogLevel::Error => LogLevel::Error.as_directive(),
            _ => LogLevel::Warn.as_directive(),
        }
    } else {
        config.level.as_directive()
    }
}
