//! `deck config` subcommands.

use super::load_config;
use pitch_deck::config::{default, xdg};
use std::path::Path;
use std::process::ExitCode;

/// Creates the default configuration file.
pub(crate) fn run_config_init_command(force: bool) -> ExitCode {
    match default::create_default_config(force) {
        Ok(path) => {
            println!("Created configuration at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the configuration file path (`--config` wins over the default).
pub(crate) fn run_config_path_command(config_file: Option<&Path>) -> ExitCode {
    match config_file {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", xdg::config_path().display()),
    }
    ExitCode::SUCCESS
}

/// Loads the configuration and prints the resolved values.
pub(crate) fn run_config_validate_command(config_file: Option<&Path>) -> ExitCode {
    match load_config(config_file) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("{config:#?}");
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}
