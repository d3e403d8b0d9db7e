//! TUI widgets.

mod alert_history;
mod data_table;
mod help;
mod index_charts;
mod learning_hub;
mod news_list;
mod notifications;
mod signal_list;
mod status_bar;
mod tab_bar;

pub use alert_history::AlertHistoryPanel;
pub use data_table::DataTable;
pub use help::HelpPanel;
pub use index_charts::IndexCharts;
pub use learning_hub::LearningHub;
pub use news_list::NewsList;
pub use notifications::{render_error, render_notification};
pub use signal_list::SignalList;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;

use crate::state::View;
use crate::ui::KeyHints;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

/// Render the one-line key hint for the current view.
pub fn render_hints(frame: &mut Frame, area: Rect, view: View, keys: &KeyHints) {
    frame.render_widget(
        Paragraph::new(keys.hint_line(view)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
