//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::KeyHints;
use crate::ui::layout::centered_rect;

fn sections(keys: &KeyHints) -> Vec<(&'static str, Vec<(String, &'static str)>)> {
    vec![
        (
            "Navigation",
            vec![
                ("1-9".to_string(), "Jump to tab"),
                (format!("Tab/{}", keys.next_tab), "Next tab"),
                (format!("S-Tab/{}", keys.prev_tab), "Previous tab"),
                (format!("{}/↓", keys.down), "Move down"),
                (format!("{}/↑", keys.up), "Move up"),
                ("Home".to_string(), "Go to top"),
                ("End".to_string(), "Go to bottom"),
            ],
        ),
        (
            "Alerts",
            vec![
                (
                    format!("{}/Enter", keys.send),
                    "Send Telegram alert (Signals, News)",
                ),
                ("Esc".to_string(), "Dismiss error"),
            ],
        ),
        (
            "Actions",
            vec![
                (keys.refresh.clone(), "Refresh quotes, charts and history"),
                (keys.help.clone(), "Toggle help"),
                (keys.quit.clone(), "Quit"),
            ],
        ),
    ]
}

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyHints) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = Vec::new();
        for (heading, entries) in sections(keys) {
            help_text.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            help_text.push(Line::from(""));
            for (key, description) in entries {
                help_text.push(Line::from(vec![
                    Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
                    Span::raw(description),
                ]));
            }
            help_text.push(Line::from(""));
        }

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}
