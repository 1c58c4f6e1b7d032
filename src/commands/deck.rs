//! Deck file commands.
//!
//! - `outline` - List slides as text or JSON
//! - `validate` - Parse and validate a deck file
//! - `init` - Write the sample deck

use super::{deck_source, load_config, load_deck};
use pitch_deck::deck::sample::{write_sample_deck, SAMPLE_DECK_NAME};
use pitch_deck::logging;
use std::path::Path;
use std::process::ExitCode;

/// Prints one line per slide, or a JSON array of `{index, kind, title}`.
pub(crate) fn run_outline_command(
    config_file: Option<&Path>,
    deck: Option<&Path>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_file) {
        Ok(config) => config,
        Err(code) => return code,
    };
    if let Err(e) = logging::init(&config.logging, false) {
        eprintln!("Logging error: {e}");
    }
    let source = deck_source(deck, &config);
    let deck = match load_deck(source.as_deref()) {
        Ok(deck) => deck,
        Err(code) => return code,
    };

    let outline = deck.outline();
    if json {
        match serde_json::to_string_pretty(&outline) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: failed to serialize outline: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for entry in &outline {
            println!("{:>3}. {:<10} {}", entry.index + 1, entry.kind, entry.title);
        }
    }
    ExitCode::SUCCESS
}

/// Parses and validates a deck, printing its slide count.
pub(crate) fn run_validate_command(config_file: Option<&Path>, deck: Option<&Path>) -> ExitCode {
    let config = match load_config(config_file) {
        Ok(config) => config,
        Err(code) => return code,
    };
    if let Err(e) = logging::init(&config.logging, false) {
        eprintln!("Logging error: {e}");
    }
    let source = deck_source(deck, &config);
    let deck = match load_deck(source.as_deref()) {
        Ok(deck) => deck,
        Err(code) => return code,
    };
    let name = source
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| SAMPLE_DECK_NAME.to_string());
    println!("Deck is valid: {name} ({} slides)", deck.slides.len());
    ExitCode::SUCCESS
}

/// Writes the sample deck to `path`.
pub(crate) fn run_init_command(path: &Path, force: bool) -> ExitCode {
    match write_sample_deck(path, force) {
        Ok(()) => {
            println!("Created sample deck at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Deck error: {e}");
            ExitCode::FAILURE
        }
    }
}
