//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# pitch-deck configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/pitch-deck/config.toml

# ==============================================================================
# Presentation
# ==============================================================================

[presentation]

# Deck file presented when `deck present` is run without a path.
# Empty string presents the built-in sample deck.
# Tilde (~) is expanded to the user's home directory.
deck = ""

# Slide to open on, counting from 1.
# Values past the end wrap around the deck.
start_slide = 1

# Draw the progress bar under the footer.
show_progress = true

# Capture the mouse so the arrow buttons and the image modal are clickable.
# Disable to keep the terminal's native text selection.
mouse = true

# Redraw tick rate as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
# The DECK_LOG environment variable overrides this value.
level = "info"

# Path to log file. Empty string means stderr.
# While a deck is on screen, stderr logging is limited to warnings so it
# does not draw over the slides; set a file to capture everything.
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file at the XDG path.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
