//! TOML configuration schema types for pitch-deck.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`) parsed by the
//! `humantime` crate in the typed accessors below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [presentation]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// How decks are presented.
    pub presentation: PresentationConfig,
    /// Log destination and verbosity.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Presenter behavior from the `[presentation]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PresentationConfig {
    /// Deck file presented when none is given on the command line.
    /// Empty string means the built-in sample deck. `~` is expanded.
    pub deck: String,
    /// One-based slide to open on. Out-of-range values wrap around the deck.
    pub start_slide: usize,
    /// Whether to draw the progress gauge under the footer.
    pub show_progress: bool,
    /// Whether to capture the mouse for the arrow buttons and modal.
    pub mouse: bool,
    /// Redraw tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            deck: String::new(),
            start_slide: 1,
            show_progress: true,
            mouse: true,
            tick_rate: "250ms".to_string(),
        }
    }
}

impl PresentationConfig {
    /// Parses `tick_rate` into a `Duration`.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let rate = humantime::parse_duration(&self.tick_rate).map_err(|e| {
            ConfigError::InvalidValue {
                key: "presentation.tick_rate".to_string(),
                message: e.to_string(),
            }
        })?;
        if rate.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "presentation.tick_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(rate)
    }

    /// The configured deck path with `~` expanded, or `None` for the sample deck.
    pub fn deck_path(&self) -> Option<PathBuf> {
        let deck = self.deck.trim();
        if deck.is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(deck))
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity. Overridden by the `DECK_LOG` environment variable.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

impl LoggingConfig {
    /// The configured log file with `~` expanded, or `None` for stderr.
    pub fn file_path(&self) -> Option<PathBuf> {
        let file = self.file.trim();
        if file.is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(file))
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
