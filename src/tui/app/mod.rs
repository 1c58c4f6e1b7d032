//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, the mounted key bindings and
//! the core render loop.

use crate::deck::{Deck, ImageAsset, Slide};
use crate::presentation::Presentation;
use crate::tui::event::{handle_key_event, navigation_keys, Action, Event, EventHandler};
use crate::tui::listener::{KeyListeners, ListenerGuard};
use crate::tui::ui::{render_presentation, ClickTargets};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a footer status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Slides being presented.
    pub deck: Deck,
    /// Active slide and modal state.
    pub presentation: Presentation,
    /// Key handlers of the mounted view.
    pub listeners: KeyListeners,
    /// Date printed on title slides, fixed when the app starts.
    pub presented_on: String,
    /// Whether to draw the progress gauge.
    pub show_progress: bool,
    /// Whether mouse capture is enabled.
    pub mouse_enabled: bool,
    /// Redraw tick interval.
    pub tick_rate: Duration,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Clickable regions from the last render pass.
    pub click_targets: ClickTargets,
}

impl App {
    /// Creates an app presenting `deck` from the one-based `start_slide`.
    ///
    /// Out-of-range start slides wrap around the deck (`0` opens the last
    /// slide). Returns `None` for a deck without slides.
    pub fn for_deck(deck: Deck, start_slide: usize) -> Option<Self> {
        let count = deck.slide_count()?;
        let start = isize::try_from(start_slide).unwrap_or(isize::MAX) - 1;
        Some(Self {
            should_quit: false,
            presentation: Presentation::starting_at(count, start),
            deck,
            listeners: KeyListeners::new(),
            presented_on: chrono::Local::now().format("%B %-d, %Y").to_string(),
            show_progress: true,
            mouse_enabled: true,
            tick_rate: Duration::from_millis(250),
            tick_count: 0,
            status_message: None,
            click_targets: ClickTargets::default(),
        })
    }

    /// Installs the navigation key bindings for as long as the guard lives.
    pub fn mount(&self) -> ListenerGuard {
        self.listeners.subscribe(navigation_keys)
    }

    /// The slide currently on screen.
    pub fn active_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.presentation.active_index())
    }

    /// Image shown in the modal overlay, if the overlay is on screen.
    ///
    /// The modal flag survives navigation, but the overlay only exists on
    /// slides that carry an image.
    pub fn visible_modal_image(&self) -> Option<&ImageAsset> {
        if !self.presentation.is_modal_open() {
            return None;
        }
        self.active_slide().and_then(Slide::image)
    }

    /// Applies an action to the presentation state.
    ///
    /// The modal only opens on slides that carry an image; otherwise a
    /// footer hint is shown instead.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Next => self.presentation.next(),
            Action::Previous => self.presentation.previous(),
            Action::First => self.presentation.first(),
            Action::Last => self.presentation.last(),
            Action::GoTo(index) => {
                if index < self.presentation.slide_count() {
                    self.presentation
                        .go_to(isize::try_from(index).unwrap_or(isize::MAX));
                } else {
                    self.set_status(format!(
                        "Deck has {} slides",
                        self.presentation.slide_count()
                    ));
                }
            }
            Action::ToggleModal => {
                let has_image = self.active_slide().and_then(Slide::image).is_some();
                if self.presentation.is_modal_open() || has_image {
                    self.presentation.toggle_modal();
                } else {
                    self.set_status("No image on this slide".to_string());
                }
            }
            Action::CloseModal => self.presentation.close_modal(),
        }
    }

    /// Handles a mouse event and returns the resulting action.
    ///
    /// While the modal overlay is drawn any click lands on it and closes it.
    /// Otherwise the arrow buttons navigate, the image hint opens the modal
    /// and the scroll wheel steps through slides.
    pub fn handle_mouse_event(&self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.visible_modal_image().is_some() {
                    return Action::CloseModal;
                }
                let (column, row) = (mouse.column, mouse.row);
                if ClickTargets::hit(self.click_targets.previous, column, row) {
                    Action::Previous
                } else if ClickTargets::hit(self.click_targets.next, column, row) {
                    Action::Next
                } else if ClickTargets::hit(self.click_targets.image, column, row) {
                    Action::ToggleModal
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollDown => Action::Next,
            MouseEventKind::ScrollUp => Action::Previous,
            _ => Action::None,
        }
    }

    /// Shows `message` in the footer for a short time.
    pub fn set_status(&mut self, message: String) {
        tracing::debug!("status: {message}");
        self.status_message = Some((message, Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Runs the TUI application: sets up terminal, mounts the key bindings,
    /// enters the event loop and restores the terminal on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        let mouse = self.mouse_enabled;
        let _hook = PanicHookGuard::install(mouse);
        self.present(mouse).await
    }

    /// Holds the terminal session and key bindings for one event loop.
    async fn present(&mut self, mouse: bool) -> io::Result<()> {
        let _session = TerminalSession::enter(mouse)?;
        let _navigation = self.mount();
        self.event_loop().await
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        self.draw(&mut terminal)?;

        while !self.should_quit {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.apply(action);
                    true // Input events always render immediately
                }
                Event::Mouse(mouse) => {
                    let action = self.handle_mouse_event(mouse);
                    self.apply(action);
                    action != Action::None
                }
                Event::Tick => {
                    self.tick_count += 1;
                    let had_message = self.status_message.is_some();
                    self.expire_status_message();
                    had_message && self.status_message.is_none()
                }
                Event::Resize(_, _) => true,
            };

            if should_render {
                self.draw(&mut terminal)?;
            }
        }
        Ok(())
    }

    /// Renders one frame and records the click targets it produced.
    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let mut targets = ClickTargets::default();
        terminal.draw(|frame| {
            targets = render_presentation(frame, self);
        })?;
        self.click_targets = targets;
        Ok(())
    }
}

/// Panic hook that restores the terminal before the previous hook prints the
/// panic. Dropping the guard reinstates the previous hook.
pub(crate) struct PanicHookGuard {
    previous: Arc<dyn Fn(&std::panic::PanicHookInfo<'_>) + Send + Sync + 'static>,
}

impl PanicHookGuard {
    pub(crate) fn install(mouse: bool) -> Self {
        let previous: Arc<dyn Fn(&std::panic::PanicHookInfo<'_>) + Send + Sync + 'static> =
            Arc::from(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal(mouse);
            chained(panic_info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // Hooks cannot be swapped while unwinding.
        if std::thread::panicking() {
            return;
        }
        drop(std::panic::take_hook());
        let previous = Arc::clone(&self.previous);
        std::panic::set_hook(Box::new(move |panic_info| previous(panic_info)));
    }
}

/// Raw mode and alternate screen (plus mouse capture when enabled), held for
/// the lifetime of the value.
struct TerminalSession {
    mouse: bool,
}

impl TerminalSession {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(self.mouse) {
            tracing::warn!("failed to restore terminal: {e}");
        }
    }
}

/// Restores the terminal to its original state.
fn restore_terminal(mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(stdout(), DisableMouseCapture)?;
    }
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
