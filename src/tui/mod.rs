//! Terminal presenter for pitch decks.
//!
//! Built on ratatui and crossterm: the active slide sits between clickable
//! arrow buttons, with a slide counter, a progress gauge and an image modal.

pub mod app;
pub mod event;
pub mod listener;
pub mod ui;
pub mod views;

#[cfg(test)]
pub mod test_utils;
