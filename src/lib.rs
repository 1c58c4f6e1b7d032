//! Pitch Deck library
//!
//! Terminal slide presenter: decks are TOML files of typed slides, navigated
//! with wrap-around keyboard and mouse controls, with a progress gauge and an
//! image modal.
//!
//! The navigation core lives in [`presentation`] and has no terminal
//! dependency; [`tui`] renders it with ratatui and feeds it crossterm input.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Deck content model, loading and the built-in sample deck.
pub mod deck;

/// Tracing subscriber setup.
pub mod logging;

/// Slide navigation and modal state.
pub mod presentation;

/// TUI module providing the terminal presenter.
pub mod tui;

pub use deck::{Deck, Slide};
pub use presentation::Presentation;
