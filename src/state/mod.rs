//! State management for NSE Cockpit.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod chart_state;
mod history_state;
mod signal_state;

pub use app_state::{AppState, View};
pub use chart_state::{ChartGroup, ChartState};
pub use history_state::HistoryState;
pub use signal_state::SignalState;

use crate::alerts::AlertRecord;
use crate::content::NEWS_ITEMS;
use crate::error::Result;
use crate::market::IndexChart;
use crate::signals::SignalSnapshot;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    NextView,
    PrevView,

    // Data refresh
    RefreshAll,
    SnapshotLoaded(SignalSnapshot),
    ChartsLoaded(ChartGroup, Vec<IndexChart>),
    LoadHistory,
    HistoryLoaded(Vec<AlertRecord>),

    // Alerts
    SendSelectedAlert,
    AlertSent(AlertRecord),
    NewsAlertSent,

    // UI actions
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Error handling
    SetError(String),
    ClearError,

    SetLoading(bool),

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn with_level(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Error, 10)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Quote table and Signals selection.
    pub signals: SignalState,
    /// Index charts.
    pub charts: ChartState,
    /// Selected headline on the News panel.
    pub news_index: usize,
    /// Alert history.
    pub history: HistoryState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::default(),
            signals: SignalState::default(),
            charts: ChartState::default(),
            news_index: 0,
            history: HistoryState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,
            Action::NextView => self.app.current_view = self.app.current_view.next(),
            Action::PrevView => self.app.current_view = self.app.current_view.prev(),

            // Data refresh
            Action::RefreshAll | Action::LoadHistory | Action::SendSelectedAlert => {
                self.app.loading = true;
            }
            Action::SnapshotLoaded(snapshot) => {
                if !snapshot.skipped.is_empty() {
                    let names: Vec<&str> =
                        snapshot.skipped.iter().map(|s| s.ticker.as_str()).collect();
                    self.app.notification = Some(Notification::warning(format!(
                        "No quote for {}",
                        names.join(", ")
                    )));
                }
                self.signals.load(snapshot);
            }
            Action::ChartsLoaded(group, charts) => self.charts.set(group, charts),
            Action::HistoryLoaded(records) => {
                self.history.load(records);
                self.app.loading = false;
            }

            // Alerts
            Action::AlertSent(record) => {
                self.app.notification = Some(Notification::success(format!(
                    "Alert sent for {}!",
                    record.symbol
                )));
                self.history.push(record);
                self.app.loading = false;
            }
            Action::NewsAlertSent => {
                self.app.notification = Some(Notification::success("News alert sent!"));
                self.app.loading = false;
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }
            Action::Tick => {
                let now = Instant::now();
                if self
                    .app
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(now))
                {
                    self.app.notification = None;
                }
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
                self.app.loading = false;
            }
            Action::ClearError => {
                self.app.error = None;
            }

            Action::SetLoading(loading) => {
                self.app.loading = loading;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    /// Length of the selectable list on the current view.
    fn list_len(&self) -> usize {
        match self.app.current_view {
            View::Signals => self.signals.len(),
            View::News => NEWS_ITEMS.len(),
            View::History => self.history.records.len(),
            _ => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut Option<usize>> {
        match self.app.current_view {
            View::Signals => Some(&mut self.signals.selected_index),
            View::History => Some(&mut self.history.selected_index),
            _ => None,
        }
    }

    fn set_selection(&mut self, index: usize) {
        if self.app.current_view == View::News {
            self.news_index = index;
        } else if let Some(selection) = self.selection_mut() {
            *selection = Some(index);
        }
    }

    fn current_selection(&self) -> usize {
        match self.app.current_view {
            View::Signals => self.signals.selected_index.unwrap_or(0),
            View::News => self.news_index,
            View::History => self.history.selected_index.unwrap_or(0),
            _ => 0,
        }
    }

    fn scroll(&mut self, delta: isize) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let new_index = self.current_selection().saturating_add_signed(delta);
        self.set_selection(new_index.min(len - 1));
    }

    fn go_to_top(&mut self) {
        if self.list_len() > 0 {
            self.set_selection(0);
        }
    }

    fn go_to_bottom(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.set_selection(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::FetchOutcome;
    use crate::signals::Signal;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx)
    }

    fn snapshot_with_skip() -> SignalSnapshot {
        SignalSnapshot::from_outcomes(vec![
            FetchOutcome::Fetched {
                ticker: "RELIANCE.NS".to_string(),
                price: dec!(2900),
            },
            FetchOutcome::Fetched {
                ticker: "TCS.NS".to_string(),
                price: dec!(3845.65),
            },
            FetchOutcome::Skipped {
                ticker: "HDFC.NS".to_string(),
                reason: "delisted".to_string(),
            },
        ])
    }

    #[test]
    fn test_skipped_tickers_raise_warning() {
        let mut store = store();
        store.reduce(Action::SnapshotLoaded(snapshot_with_skip()));

        let notification = store.app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert_eq!(notification.message, "No quote for HDFC.NS");
        assert_eq!(store.signals.len(), 2);
    }

    #[test]
    fn test_scroll_is_clamped_per_view() {
        let mut store = store();
        store.reduce(Action::SnapshotLoaded(snapshot_with_skip()));

        store.reduce(Action::ScrollDown);
        store.reduce(Action::ScrollDown);
        assert_eq!(store.signals.selected_index, Some(1));
        store.reduce(Action::GoToTop);
        store.reduce(Action::ScrollUp);
        assert_eq!(store.signals.selected_index, Some(0));

        store.reduce(Action::SetView(View::News));
        store.reduce(Action::GoToBottom);
        assert_eq!(store.news_index, NEWS_ITEMS.len() - 1);
        // Signals selection is untouched by News navigation.
        assert_eq!(store.signals.selected_index, Some(0));
    }

    #[test]
    fn test_scroll_on_empty_history_is_noop() {
        let mut store = store();
        store.reduce(Action::SetView(View::History));
        store.reduce(Action::ScrollDown);
        assert_eq!(store.history.selected_index, None);
    }

    #[test]
    fn test_alert_sent_appends_to_history_view() {
        let mut store = store();
        store.reduce(Action::HistoryLoaded(Vec::new()));
        store.reduce(Action::AlertSent(AlertRecord {
            timestamp: Utc::now(),
            symbol: "SBIN".to_string(),
            action: Signal::Buy,
            message: "🚀 BUY Alert".to_string(),
        }));

        assert_eq!(store.history.records.len(), 1);
        assert_eq!(store.history.selected_index, Some(0));
        assert!(!store.app.loading);
        assert_eq!(
            store.app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_expired_notification_cleared_on_tick() {
        let mut store = store();
        let mut notification = Notification::info("refreshed");
        notification.duration_secs = 0;
        store.reduce(Action::ShowNotification(notification));
        store.reduce(Action::Tick);
        assert!(store.app.notification.is_none());

        store.reduce(Action::ShowNotification(Notification::error("boom")));
        store.reduce(Action::Tick);
        assert!(store.app.notification.is_some());
    }

    #[test]
    fn test_dispatch_sends_on_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx);
        store.dispatch(Action::LoadHistory).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::LoadHistory)));
    }
}
