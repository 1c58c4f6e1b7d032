//! Slide bodies, one renderer per slide kind.

use crate::deck::{
    AgendaSlide, Bullet, ConclusionSlide, FeatureCard, FeatureSlide, PartsSlide, Slide,
    TitleSlide,
};
use crate::tui::views::parts::render_parts_table;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Minimum width for laying feature cards out two per row.
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// Minimum width for placing parts tables side by side.
const SIDE_BY_SIDE_TABLES_MIN_WIDTH: u16 = 120;

/// Renders the body of `slide` into `area`.
///
/// `presented_on` is the date shown on title slides that ask for it.
pub fn render_slide(frame: &mut Frame, area: Rect, slide: &Slide, presented_on: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match slide {
        Slide::Title(s) => render_title(frame, area, s, presented_on),
        Slide::Agenda(s) => render_agenda(frame, area, s),
        Slide::Features(s) => render_features(frame, area, s),
        Slide::Parts(s) => render_parts(frame, area, s),
        Slide::Conclusion(s) => render_conclusion(frame, area, s),
    }
}

fn heading_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn quote_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

fn quoted(text: &str) -> String {
    format!("“{text}”")
}

/// Rows `text` occupies when wrapped to `width` columns (approximate).
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn bullet_line(bullet: &Bullet) -> Line<'_> {
    let mut spans = Vec::with_capacity(4);
    if !bullet.icon.is_empty() {
        spans.push(Span::raw(format!("{} ", bullet.icon)));
    }
    spans.push(Span::styled(
        bullet.heading.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if !bullet.text.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(bullet.text.as_str()));
    }
    Line::from(spans)
}

/// Heading plus an optional quote, returning the area left below them.
fn render_header(frame: &mut Frame, area: Rect, title: &str, quote: &str) -> Rect {
    let quote_rows = wrapped_height(&quoted(quote), area.width);
    let header_rows = if quote.is_empty() {
        2
    } else {
        quote_rows.saturating_add(3)
    };
    let [header, rest] = split_top(area, header_rows);

    let mut lines = vec![Line::from(Span::styled(title, heading_style())), Line::raw("")];
    if !quote.is_empty() {
        lines.push(Line::from(Span::styled(quoted(quote), quote_style())));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), header);
    rest
}

/// Splits `rows` rows off the top of `area` (clamped to its height).
fn split_top(area: Rect, rows: u16) -> [Rect; 2] {
    let rows = rows.min(area.height);
    let top = Rect {
        height: rows,
        ..area
    };
    let bottom = Rect {
        y: area.y + rows,
        height: area.height - rows,
        ..area
    };
    [top, bottom]
}

fn render_title(frame: &mut Frame, area: Rect, slide: &TitleSlide, presented_on: &str) {
    let mut lines = vec![
        Line::from(Span::styled(slide.title.as_str(), heading_style())),
        Line::raw(""),
    ];
    if !slide.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            slide.subtitle.as_str(),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::raw(""));
    }
    if !slide.presenter.is_empty() {
        lines.push(Line::from(Span::styled(
            slide.presenter.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    if slide.show_date && !presented_on.is_empty() {
        lines.push(Line::from(Span::styled(
            presented_on,
            Style::default().fg(Color::Gray),
        )));
    }

    let content_rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top_padding = area.height.saturating_sub(content_rows) / 2;
    let [_, body] = split_top(area, top_padding);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

fn render_agenda(frame: &mut Frame, area: Rect, slide: &AgendaSlide) {
    let body = render_header(frame, area, &slide.title, "");
    let mut lines = Vec::new();
    if !slide.intro.is_empty() {
        lines.push(Line::raw(slide.intro.as_str()));
        lines.push(Line::raw(""));
    }
    for item in &slide.items {
        lines.push(bullet_line(item));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
}

fn render_features(frame: &mut Frame, area: Rect, slide: &FeatureSlide) {
    let body = render_header(frame, area, &slide.title, &slide.quote);
    if slide.cards.is_empty() || body.height == 0 {
        return;
    }

    let per_row = if body.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let row_count = slide.cards.len().div_ceil(per_row);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(body);

    for (row_area, cards) in row_areas.iter().zip(slide.cards.chunks(per_row)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);
        for (cell, card) in cells.iter().zip(cards) {
            render_card(frame, *cell, card);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &FeatureCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(card.heading.as_str(), heading_style()));
    let paragraph = Paragraph::new(card.body.as_str())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_parts(frame: &mut Frame, area: Rect, slide: &PartsSlide) {
    let body = render_header(frame, area, &slide.title, &slide.quote);
    if slide.tables.is_empty() || body.height == 0 {
        return;
    }
    let count = slide.tables.len();
    let direction = if body.width >= SIDE_BY_SIDE_TABLES_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let table_areas = Layout::default()
        .direction(direction)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(body);
    for (table_area, table) in table_areas.iter().zip(&slide.tables) {
        render_parts_table(frame, *table_area, table);
    }
}

fn render_conclusion(frame: &mut Frame, area: Rect, slide: &ConclusionSlide) {
    let body = render_header(frame, area, &slide.title, &slide.summary);
    let mut lines = Vec::new();
    for point in &slide.points {
        lines.push(bullet_line(point));
    }
    if !slide.commitment.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            quoted(&slide.commitment),
            quote_style(),
        )));
    }
    if !slide.closing.is_empty() {
        lines.push(Line::raw(""));
        lines.push(
            Line::from(Span::styled(slide.closing.as_str(), heading_style()))
                .alignment(Alignment::Center),
        );
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
}
