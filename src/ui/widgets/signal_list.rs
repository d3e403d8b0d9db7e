//! Signals panel: the quote table beside the selected alert text.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::alerts::format_signal_message;
use crate::signals::Signal;
use crate::state::Store;
use crate::ui::KeyHints;

/// Signals panel.
pub struct SignalList;

/// Color used for an action everywhere it is shown.
pub fn signal_style(signal: Signal) -> Style {
    match signal {
        Signal::Buy => Style::default().fg(Color::Green),
        Signal::Sell => Style::default().fg(Color::Red),
    }
}

impl SignalList {
    /// Render the signals panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyHints) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        Self::render_table(frame, chunks[0], store);
        Self::render_detail(frame, chunks[1], store, keys);
    }

    fn render_table(frame: &mut Frame, area: Rect, store: &Store) {
        let header_cells = ["Stock", "Signal", "Price", "Target", "SL", "Confidence"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows_src = store.signals.table().map(|t| t.rows()).unwrap_or_default();
        let rows = rows_src.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.symbol.clone()),
                Cell::from(row.action.as_str()).style(signal_style(row.action)),
                Cell::from(format!("₹{:.2}", row.price)),
                Cell::from(format!("{:.2}", row.target_price)),
                Cell::from(format!("{:.2}", row.stop_loss)),
                Cell::from(format!("{}%", row.confidence)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(12),
                Constraint::Length(7),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Signals ({}) ", rows_src.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.signals.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_detail(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyHints) {
        let block = Block::default()
            .title(" Alert Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let lines: Vec<Line> = match store.signals.selected_row() {
            Some(row) => {
                let mut lines: Vec<Line> = format_signal_message(row)
                    .lines()
                    .map(|l| Line::from(l.to_string()))
                    .collect();
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Press {} to send Telegram alert: {}", keys.send, row.symbol),
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            None if store.app.loading => vec![Line::from("Loading quotes...")],
            None => vec![Line::from(format!(
                "No quotes available. Press {} to refresh.",
                keys.refresh
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
