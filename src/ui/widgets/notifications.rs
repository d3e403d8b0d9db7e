//! Notification and error popups.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};

fn render_popup(frame: &mut Frame, area: Rect, color: Color, prefix: Span<'_>, text: &str) {
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(Line::from(vec![prefix, Span::raw(text)]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Render a notification popup.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (color, icon) = match notification.level {
        NotificationLevel::Info => (Color::Cyan, "ℹ"),
        NotificationLevel::Success => (Color::Green, "✓"),
        NotificationLevel::Warning => (Color::Yellow, "⚠"),
        NotificationLevel::Error => (Color::Red, "✗"),
    };

    let prefix = Span::styled(format!("{icon} "), Style::default().fg(color));
    render_popup(frame, area, color, prefix, &notification.message);
}

/// Render an error popup. Dismissed with Esc.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let prefix = Span::styled(
        "✗ Error: ",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    );
    render_popup(frame, area, Color::Red, prefix, error);
}
