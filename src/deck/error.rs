//! Error types for loading, validating, and writing deck files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or writing a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Failed to read the deck file from disk.
    #[error("Failed to read deck file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed into a deck.
    #[error("Invalid deck at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line of the error (0 if unknown).
        line: usize,
        /// One-based column of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// The deck file does not exist.
    #[error("Deck file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The deck has no slides.
    #[error("Deck {path} has no slides")]
    Empty {
        /// Path of the empty deck.
        path: PathBuf,
    },

    /// A parts table has no rows.
    #[error("Deck {path}: slide {slide} table \"{caption}\" has no rows")]
    EmptyTable {
        /// Path of the deck.
        path: PathBuf,
        /// One-based slide number.
        slide: usize,
        /// Caption of the offending table.
        caption: String,
    },

    /// A deck file already exists at the target path.
    #[error("Deck file already exists: {path}")]
    AlreadyExists {
        /// Path where the file already exists.
        path: PathBuf,
    },

    /// Failed to write a deck file to disk.
    #[error("Failed to write deck file: {path}")]
    WriteError {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
