//! Command implementations for the `deck` CLI.
//!
//! - `present` - Run the terminal presenter
//! - `deck` - Deck file commands (outline, validate, init)
//! - `config` - Configuration file management

pub(crate) mod config;
pub(crate) mod deck;
pub(crate) mod present;

pub(crate) use config::*;
pub(crate) use deck::*;
pub(crate) use present::*;

use pitch_deck::config::{loader::ConfigLoader, schema::Config};
use pitch_deck::deck::{loader::DeckLoader, Deck};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Loads configuration from `path` (or the default location), reporting
/// failures on stderr.
fn load_config(path: Option<&Path>) -> Result<Config, ExitCode> {
    ConfigLoader::load(path).map_err(|e| {
        eprintln!("Config error: {e}");
        ExitCode::FAILURE
    })
}

/// Deck chosen on the command line, else the configured default deck.
/// `None` selects the built-in sample deck.
fn deck_source(cli_deck: Option<&Path>, config: &Config) -> Option<PathBuf> {
    cli_deck
        .map(Path::to_path_buf)
        .or_else(|| config.presentation.deck_path())
}

/// Loads and validates a deck, reporting failures on stderr.
fn load_deck(path: Option<&Path>) -> Result<Deck, ExitCode> {
    DeckLoader::load(path).map_err(|e| {
        eprintln!("Deck error: {e}");
        ExitCode::FAILURE
    })
}
