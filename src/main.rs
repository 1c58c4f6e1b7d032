//! Pitch Deck - CLI entry point
//!
//! Presents TOML slide decks in the terminal. Running `deck` without a
//! subcommand presents the configured deck (or the built-in sample deck).

mod commands;

use clap::{Args, Parser, Subcommand};
use pitch_deck::deck::sample::SAMPLE_DECK_FILE;
use std::path::PathBuf;
use std::process::ExitCode;

/// Terminal presenter for TOML slide decks
#[derive(Parser)]
#[command(name = "deck")]
#[command(version, about = "Present TOML slide decks in the terminal")]
struct Cli {
    /// Configuration file (defaults to the XDG config location)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the deck CLI
#[derive(Subcommand)]
enum Commands {
    /// Present a deck (the default command)
    Present(PresentArgs),

    /// List the slides of a deck
    Outline {
        /// Deck file (defaults to the configured deck or the sample deck)
        deck: Option<PathBuf>,
        /// Print a JSON array of {index, kind, title}
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate a deck file
    Validate {
        /// Deck file (defaults to the configured deck or the sample deck)
        deck: Option<PathBuf>,
    },

    /// Write the sample deck to a file
    Init {
        /// Destination file
        #[arg(default_value = SAMPLE_DECK_FILE)]
        path: PathBuf,
        /// Overwrite an existing file (creates backup)
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for `deck present`.
#[derive(Args, Default)]
struct PresentArgs {
    /// Deck file (defaults to the configured deck or the sample deck)
    deck: Option<PathBuf>,
    /// One-based slide to open on; out-of-range values wrap around
    #[arg(long, value_name = "N")]
    start: Option<usize>,
    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_file = cli.config_file.as_deref();

    match cli
        .command
        .unwrap_or_else(|| Commands::Present(PresentArgs::default()))
    {
        Commands::Present(args) => commands::run_present_command(
            config_file,
            args.deck.as_deref(),
            args.start,
            args.no_mouse,
        ),
        Commands::Outline { deck, json } => {
            commands::run_outline_command(config_file, deck.as_deref(), json)
        }
        Commands::Validate { deck } => commands::run_validate_command(config_file, deck.as_deref()),
        Commands::Init { path, force } => commands::run_init_command(&path, force),
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::run_config_init_command(force),
            ConfigAction::Path => commands::run_config_path_command(config_file),
            ConfigAction::Validate => commands::run_config_validate_command(config_file),
        },
    }
}
