//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::market::universe::TOP_STOCKS;
use crate::state::Store;
use crate::ui::KeyHints;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyHints) {
        let fetched = store.signals.len();
        let skipped = store.signals.skipped().len();

        let quotes_style = if skipped > 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };
        let quotes = Span::styled(
            format!("{}/{} quotes", fetched, TOP_STOCKS.len()),
            quotes_style,
        );

        let updated = match store.signals.last_updated() {
            Some(at) => Span::raw(format!("updated {}", at.format("%H:%M:%S UTC"))),
            None => Span::styled("not loaded", Style::default().fg(Color::DarkGray)),
        };

        let loading = if store.app.loading {
            Span::styled(
                " Loading... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let help_hint = Span::styled(
            format!(" Press {} for help ", keys.help),
            Style::default().fg(Color::Gray),
        );

        let left = vec![
            Span::styled(
                " NSE Cockpit ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            quotes,
            Span::raw(" | "),
            updated,
            loading,
        ];

        // Right-align the help hint
        let left_width: usize = left.iter().map(Span::width).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + help_hint.width());

        let mut line = left;
        line.push(Span::raw(" ".repeat(padding)));
        line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
