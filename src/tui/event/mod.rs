//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh,
//! and maps keys to presentation [`Action`]s.

use crate::tui::app::App;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        // Windows reports releases too; act on presses only.
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Ok(Event::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore key releases, focus and paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by a key or mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Advance one slide (wrapping).
    Next,
    /// Go back one slide (wrapping).
    Previous,
    /// Jump to the first slide.
    First,
    /// Jump to the last slide.
    Last,
    /// Jump to the zero-based slide index (wrapping).
    GoTo(usize),
    /// Open or close the image modal.
    ToggleModal,
    /// Close the image modal.
    CloseModal,
}

/// Key bindings installed while the presentation view is mounted.
///
/// `→`/`l`/`Space`/`PageDown` advance, `←`/`h`/`PageUp` go back, `Home`/`End`
/// jump to either end, `1`-`9` jump to a slide, `i` toggles the image modal
/// and `Esc` closes it.
pub fn navigation_keys(key: &KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let action = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::PageDown => {
            Action::Next
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Action::Previous,
        KeyCode::Home => Action::First,
        KeyCode::End => Action::Last,
        KeyCode::Char(c @ '1'..='9') => Action::GoTo(usize::from(c as u8 - b'1')),
        KeyCode::Char('i') | KeyCode::Char('I') => Action::ToggleModal,
        KeyCode::Esc => Action::CloseModal,
        _ => return None,
    };
    Some(action)
}

/// Handles a key event by resolving it against the app's mounted key listeners.
///
/// Quit keys always work; everything else reaches the deck only through a
/// subscribed listener, so an unmounted view ignores navigation keys.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if should_quit(key) {
        return Action::Quit;
    }
    app.listeners
        .dispatch(&key)
        .into_iter()
        .next()
        .unwrap_or(Action::None)
}

/// Returns true if the key event should trigger application quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')))
}
