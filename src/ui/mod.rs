//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod hints;
mod layout;
mod widgets;

pub use hints::KeyHints;
pub use layout::Layout;
pub use widgets::{
    AlertHistoryPanel, DataTable, HelpPanel, IndexCharts, LearningHub, NewsList, SignalList,
    StatusBar, TabBar,
};

use crate::signals::QuoteTable;
use crate::signals::projection::{options_view, predictions_view, recommendations_view};
use crate::state::{ChartGroup, Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, keys: &KeyHints, show_hints: bool) {
        let layout = Layout::new(frame.area(), show_hints);

        StatusBar::render(frame, layout.status_area, store, keys);
        TabBar::render(frame, layout.tab_area, store);

        let empty = QuoteTable::default();
        let table = store.signals.table().unwrap_or(&empty);
        let area = layout.main_area;

        match store.app.current_view {
            View::Signals => SignalList::render(frame, area, store, keys),
            View::OptionsStrategies => DataTable::render(frame, area, &options_view(table)),
            View::Predictions => DataTable::render(frame, area, &predictions_view(table)),
            View::IndexAnalysis => {
                let charts = store.charts.group(ChartGroup::Domestic);
                IndexCharts::render(frame, area, " Index Analysis ", charts, keys);
            }
            View::Recommendations => {
                DataTable::render(frame, area, &recommendations_view(table));
            }
            View::News => NewsList::render(frame, area, store),
            View::LearningHub => LearningHub::render(frame, area),
            View::GlobalMarkets => {
                let charts = store.charts.group(ChartGroup::Global);
                IndexCharts::render(frame, area, " Global Markets ", charts, keys);
            }
            View::History => AlertHistoryPanel::render(frame, area, store),
        }

        if show_hints {
            widgets::render_hints(frame, layout.hint_area, store.app.current_view, keys);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error);
        }
    }
}
