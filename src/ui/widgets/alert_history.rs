//! Alerts History panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::signal_list::signal_style;
use crate::state::Store;

/// Contents of the alert history file, oldest first.
pub struct AlertHistoryPanel;

impl AlertHistoryPanel {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let records = &store.history.records;
        let block = Block::default()
            .title(format!(" Alerts History ({}) ", records.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if records.is_empty() {
            let text = if store.history.loaded {
                "No alerts sent yet."
            } else {
                "Loading history..."
            };
            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(["Timestamp", "Stock", "Action", "Message"].map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .bottom_margin(1);

        let rows = records.iter().map(|r| {
            Row::new(vec![
                Cell::from(r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
                Cell::from(r.symbol.clone()),
                Cell::from(r.action.as_str()).style(signal_style(r.action)),
                // Only the headline line of the multi-line message fits a row.
                Cell::from(r.message.lines().next().unwrap_or_default().to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.history.selected_index);
        frame.render_stateful_widget(table, area, &mut state);
    }
}
