//! Image modal overlay.
//!
//! A terminal cannot show the picture itself, so the modal presents the
//! image's caption and file path in a centered box over the slide.

use crate::deck::ImageAsset;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 9;

/// Centered modal rectangle inside `area`, or `None` when there is no room.
pub fn modal_area(area: Rect) -> Option<Rect> {
    let width = MODAL_WIDTH.min(area.width.saturating_sub(4));
    let height = MODAL_HEIGHT.min(area.height.saturating_sub(2));
    if width < 20 || height < 5 {
        return None;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Some(Rect::new(x, y, width, height))
}

/// Renders the image modal for `image` centered in `area`.
pub fn render_image_modal(frame: &mut Frame, area: Rect, image: &ImageAsset) {
    let Some(modal) = modal_area(area) else {
        return;
    };
    frame.render_widget(Clear, modal);

    let title = if image.caption.is_empty() {
        "── Image ──".to_string()
    } else {
        format!("── {} ──", image.caption)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            image.path.display().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "[Esc] or click to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
