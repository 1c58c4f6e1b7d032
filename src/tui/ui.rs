//! Main rendering orchestration for the presenter.
//!
//! [`render_presentation`] is a pure function of the app state: it paints the
//! active slide between the previous/next arrow buttons, the footer with the
//! slide counter, the progress gauge and, when open, the image modal. It
//! returns the screen regions of the clickable elements so mouse events can
//! be hit-tested against the frame the user actually saw.

use crate::tui::app::App;
use crate::tui::views::modal::render_image_modal;
use crate::tui::views::slide::render_slide;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Width of each arrow button column.
pub const ARROW_WIDTH: u16 = 5;

/// Previous-slide button glyph.
const PREV_ARROW: &str = "❮";

/// Next-slide button glyph.
const NEXT_ARROW: &str = "❯";

/// Footer text showing available keybindings.
const KEY_HINTS: &str = "[←/→] Navigate  [i] Image  [q] Quit";

/// Screen regions that react to mouse clicks, captured during render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTargets {
    /// Previous-slide arrow button.
    pub previous: Option<Rect>,
    /// Next-slide arrow button.
    pub next: Option<Rect>,
    /// "View image" hint on slides with an image.
    pub image: Option<Rect>,
}

impl ClickTargets {
    /// Returns `true` when (`column`, `row`) lies inside `target`.
    pub fn hit(target: Option<Rect>, column: u16, row: u16) -> bool {
        target.is_some_and(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }
}

/// Renders the whole presentation and returns the click targets it drew.
pub fn render_presentation(frame: &mut Frame, app: &App) -> ClickTargets {
    let area = frame.area();
    let mut targets = ClickTargets::default();

    let mut constraints = vec![Constraint::Min(3), Constraint::Length(1)];
    if app.show_progress {
        constraints.push(Constraint::Length(1));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(10),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(rows[0]);

    render_arrow(frame, columns[0], PREV_ARROW);
    render_arrow(frame, columns[2], NEXT_ARROW);
    targets.previous = Some(columns[0]);
    targets.next = Some(columns[2]);

    let position = format!(
        " {} / {} ",
        app.presentation.slide_number(),
        app.presentation.slide_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(position).alignment(Alignment::Right));
    let inner = block.inner(columns[1]);
    frame.render_widget(block, columns[1]);

    if let Some(slide) = app.active_slide() {
        let slide_area = match slide.image() {
            Some(image) if inner.height > 2 => {
                let [body, hint] = split_hint_row(inner);
                render_image_hint(frame, hint, &image.caption);
                targets.image = Some(hint);
                body
            }
            _ => inner,
        };
        render_slide(frame, slide_area, slide, &app.presented_on);
    }

    render_footer(frame, rows[1], app);

    if app.show_progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(app.presentation.progress_ratio())
            .label("");
        frame.render_widget(gauge, rows[2]);
    }

    if let Some(image) = app.visible_modal_image() {
        render_image_modal(frame, area, image);
    }

    targets
}

/// Splits off the last row of `area` for the image hint.
fn split_hint_row(area: Rect) -> [Rect; 2] {
    let body = Rect {
        height: area.height - 1,
        ..area
    };
    let hint = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    [body, hint]
}

/// Draws an arrow button vertically centered in its column.
fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let arrow = Paragraph::new(Span::styled(
        glyph,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(arrow, row);
}

fn render_image_hint(frame: &mut Frame, area: Rect, caption: &str) {
    let label = if caption.is_empty() {
        "[i] View image".to_string()
    } else {
        format!("[i] View image: {caption}")
    };
    let hint = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

/// Footer: deck label on the left, key hints (or a status message) on the right.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let label = app.deck.footer.as_str();

    let right = match &app.status_message {
        Some((message, expiry)) if Instant::now() < *expiry => {
            Span::styled(message.clone(), Style::default().fg(Color::Yellow))
        }
        _ => Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    };

    let used = label.chars().count() + right.content.chars().count();
    let padding = width.saturating_sub(used);
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(padding)),
        right,
    ]));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests;
