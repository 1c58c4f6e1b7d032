//! Deck file loader with position-aware error reporting.
//!
//! Parses a TOML deck, then validates it: a deck needs at least one slide and
//! every parts table needs at least one row.

use std::fs;
use std::path::Path;

use crate::config::loader::toml_error_position;
use crate::deck::error::DeckError;
use crate::deck::sample::{SAMPLE_DECK, SAMPLE_DECK_NAME};
use crate::deck::{Deck, Slide};

/// Stateless deck loader.
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck from `path`, or the built-in sample deck when `None`.
    pub fn load(path: Option<&Path>) -> Result<Deck, DeckError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                tracing::debug!("no deck path given, using built-in sample deck");
                Self::parse_toml(SAMPLE_DECK, Path::new(SAMPLE_DECK_NAME))
            }
        }
    }

    /// Load and validate a deck file.
    pub fn load_from_path(path: &Path) -> Result<Deck, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DeckError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DeckError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let deck = Self::parse_toml(&content, path)?;
        tracing::debug!(
            "loaded deck {} with {} slides",
            path.display(),
            deck.slides.len()
        );
        Ok(deck)
    }

    /// Parse and validate a TOML string. `path` is used for error messages only.
    pub fn parse_toml(content: &str, path: &Path) -> Result<Deck, DeckError> {
        let deck: Deck = toml::from_str(content).map_err(|e| {
            let (line, column) = toml_error_position(content, &e);
            DeckError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })?;
        Self::validate(&deck, path)?;
        Ok(deck)
    }

    fn validate(deck: &Deck, path: &Path) -> Result<(), DeckError> {
        if deck.slides.is_empty() {
            return Err(DeckError::Empty {
                path: path.to_path_buf(),
            });
        }
        for (index, slide) in deck.slides.iter().enumerate() {
            if let Slide::Parts(parts) = slide {
                if let Some(table) = parts.tables.iter().find(|t| t.rows.is_empty()) {
                    return Err(DeckError::EmptyTable {
                        path: path.to_path_buf(),
                        slide: index + 1,
                        caption: table.caption.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
