//! Bill-of-materials tables for parts slides.

use crate::deck::{Emphasis, Part, PartsTable};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

/// Column headers, in display order.
const HEADERS: [&str; 3] = ["Component", "Part Number", "Notes"];

/// Maps a row's emphasis to its text style.
pub fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Plain => Style::default(),
        Emphasis::Strong => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Emphasis::Em => Style::default().add_modifier(Modifier::ITALIC),
    }
}

fn part_row(part: &Part) -> Row<'_> {
    Row::new([
        Cell::from(part.component.as_str()),
        Cell::from(Span::styled(
            part.part_number.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        Cell::from(part.notes.as_str()),
    ])
    .style(emphasis_style(part.emphasis))
}

/// Renders one captioned parts table into `area`.
pub fn render_parts_table(frame: &mut Frame, area: Rect, table: &PartsTable) {
    if area.height < 3 {
        return;
    }
    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            table.caption.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let widget = Table::new(
        table.rows.iter().map(part_row),
        [
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);
    frame.render_widget(widget, area);
}
