//! `deck present`: run the terminal presenter.

use super::{deck_source, load_config, load_deck};
use pitch_deck::logging;
use pitch_deck::tui::app::App;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

/// Loads config and deck, then presents until the user quits.
pub(crate) fn run_present_command(
    config_file: Option<&Path>,
    deck: Option<&Path>,
    start: Option<usize>,
    no_mouse: bool,
) -> ExitCode {
    let config = match load_config(config_file) {
        Ok(config) => config,
        Err(code) => return code,
    };
    if let Err(e) = logging::init(&config.logging, true) {
        eprintln!("Logging error: {e}");
        return ExitCode::FAILURE;
    }

    let source = deck_source(deck, &config);
    let deck = match load_deck(source.as_deref()) {
        Ok(deck) => deck,
        Err(code) => return code,
    };
    let tick_rate = match config.presentation.tick_rate() {
        Ok(rate) => rate,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start_slide = start.unwrap_or(config.presentation.start_slide);
    let Some(mut app) = App::for_deck(deck, start_slide) else {
        eprintln!("Deck error: deck has no slides");
        return ExitCode::FAILURE;
    };
    app.show_progress = config.presentation.show_progress;
    app.mouse_enabled = config.presentation.mouse && !no_mouse;
    app.tick_rate = tick_rate;

    if !std::io::stdout().is_terminal() {
        eprintln!("Error: presenting needs an interactive terminal");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        "presenting {} slides from slide {}",
        app.presentation.slide_count(),
        app.presentation.slide_number()
    );
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = rt.block_on(app.run()) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
