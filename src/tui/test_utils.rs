//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides terminal and buffer helpers plus key and mouse event builders.

#![cfg(test)]

use crate::deck::{loader::DeckLoader, sample::SAMPLE_DECK, Deck};
use crate::tui::app::App;
use crate::tui::ui::{render_presentation, ClickTargets};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::path::Path;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    (0..area.height).find(|&row| row_text(buffer, row).contains(text))
}

/// Returns the whole buffer as newline-separated rows.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    (0..area.height)
        .map(|row| row_text(buffer, row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The built-in sample deck (six slides, an image on slide 3).
pub fn sample_deck() -> Deck {
    DeckLoader::parse_toml(SAMPLE_DECK, Path::new("sample.toml")).expect("sample deck parses")
}

/// App presenting the sample deck from its first slide.
pub fn sample_app() -> App {
    App::for_deck(sample_deck(), 1).expect("sample deck has slides")
}

/// Renders the presentation and returns the buffer with its click targets.
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> (Buffer, ClickTargets) {
    let mut terminal = test_terminal(width, height);
    let mut targets = ClickTargets::default();
    terminal
        .draw(|frame| {
            targets = render_presentation(frame, app);
        })
        .expect("draw failed");
    (terminal.backend().buffer().clone(), targets)
}

/// A plain key press.
pub fn key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::NONE)
}

/// A key press with modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// A mouse event of `kind` at (`column`, `row`).
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A left click at (`column`, `row`).
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_terminal_creates_terminal() {
        let terminal = test_terminal(80, 24);
        let size = terminal.size().expect("should have size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_row_text_out_of_range_is_empty() {
        let terminal = test_terminal(10, 2);
        assert_eq!(row_text(terminal.backend().buffer(), 5), "");
    }

    #[test]
    fn test_find_row_with_text_returns_row_index() {
        let mut terminal = test_terminal(40, 10);
        terminal
            .draw(|frame| {
                let area = frame.area();
                use ratatui::layout::{Constraint, Direction, Layout};
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Length(1)])
                    .split(area);
                frame.render_widget(ratatui::widgets::Paragraph::new("First Line"), chunks[0]);
                frame.render_widget(ratatui::widgets::Paragraph::new("Target Row"), chunks[1]);
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert_eq!(find_row_with_text(buffer, "Target Row"), Some(1));
        assert_eq!(find_row_with_text(buffer, "Missing"), None);
    }

    #[test]
    fn test_sample_app_starts_on_first_slide() {
        let app = sample_app();
        assert_eq!(app.presentation.active_index(), 0);
        assert_eq!(app.presentation.slide_count(), 6);
    }
}
