//! Learning Hub panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::content::LEARNING_HUB;

pub struct LearningHub;

impl LearningHub {
    pub fn render(frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for section in LEARNING_HUB {
            lines.push(Line::from(Span::styled(
                format!("{}:", section.title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for (term, meaning) in section.entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {term}: "), Style::default().fg(Color::Cyan)),
                    Span::raw(*meaning),
                ]));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Learning Hub ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}
