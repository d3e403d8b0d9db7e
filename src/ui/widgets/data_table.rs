//! Generic table for projected panels.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::signals::projection::TableView;

/// Renders a [`TableView`] with equal-width columns.
pub struct DataTable;

impl DataTable {
    pub fn render(frame: &mut Frame, area: Rect, view: &TableView) {
        let header = Row::new(view.headers.iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .bottom_margin(1);

        let rows = view.rows.iter().map(|cells| {
            Row::new(cells.iter().map(|c| {
                let style = match c.as_str() {
                    "BUY" => Style::default().fg(Color::Green),
                    "SELL" => Style::default().fg(Color::Red),
                    _ => Style::default(),
                };
                Cell::from(c.as_str()).style(style)
            }))
        });

        let n = u32::try_from(view.headers.len().max(1)).unwrap_or(1);
        let widths = vec![Constraint::Ratio(1, n); view.headers.len()];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(format!(" {} ({}) ", view.title, view.rows.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(table, area);
    }
}
