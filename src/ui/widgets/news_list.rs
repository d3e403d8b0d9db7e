//! News & Events panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::content::NEWS_ITEMS;
use crate::state::Store;

/// Static headlines, each sendable as a news alert.
pub struct NewsList;

impl NewsList {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let items: Vec<ListItem> = NEWS_ITEMS
            .iter()
            .map(|n| ListItem::new(format!("- {n}")))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" News & Events (s: send news alert) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(store.news_index));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
