//! The refresh and alert operations behind the UI.
//!
//! [`Dashboard`] owns the external collaborators and writes results into
//! the [`Store`] as actions, so the same flow runs under the terminal app
//! and under tests with mocked sources.

use crate::alerts::AlertDispatcher;
use crate::content::NEWS_ITEMS;
use crate::market::universe::{DOMESTIC_INDICES, GLOBAL_INDICES, TOP_STOCKS};
use crate::market::{QuoteSource, fetch_index_charts, fetch_quotes};
use crate::signals::SignalSnapshot;
use crate::state::{Action, ChartGroup, Notification, Store, View};
use tracing::{error, info};

/// Quote source plus alert dispatcher.
pub struct Dashboard {
    source: Box<dyn QuoteSource>,
    dispatcher: AlertDispatcher,
}

impl Dashboard {
    pub fn new(source: Box<dyn QuoteSource>, dispatcher: AlertDispatcher) -> Self {
        Self { source, dispatcher }
    }

    /// Rebuild every panel: quotes, both chart groups and the history.
    pub async fn refresh(&self, store: &mut Store) {
        store.reduce(Action::RefreshAll);

        let outcomes = fetch_quotes(self.source.as_ref(), TOP_STOCKS).await;
        store.reduce(Action::SnapshotLoaded(SignalSnapshot::from_outcomes(outcomes)));

        for (group, indices) in [
            (ChartGroup::Domestic, DOMESTIC_INDICES),
            (ChartGroup::Global, GLOBAL_INDICES),
        ] {
            match fetch_index_charts(self.source.as_ref(), indices).await {
                Ok(charts) => store.reduce(Action::ChartsLoaded(group, charts)),
                Err(e) => {
                    error!(?group, error = %e, "index charts failed");
                    // Drop lines from the previous refresh
                    store.reduce(Action::ChartsLoaded(group, Vec::new()));
                    store.reduce(Action::SetError(e.to_string()));
                }
            }
        }

        self.load_history(store);
        store.reduce(Action::SetLoading(false));
        info!(rows = store.signals.len(), "dashboard refreshed");
    }

    /// Re-read the history file.
    pub fn load_history(&self, store: &mut Store) {
        match self.dispatcher.history().load() {
            Ok(records) => store.reduce(Action::HistoryLoaded(records)),
            Err(e) => {
                error!(error = %e, "could not read alert history");
                store.reduce(Action::SetError(e.to_string()));
            }
        }
    }

    /// Send an alert for whatever is selected on the current view.
    pub async fn send_selected_alert(&self, store: &mut Store) {
        match store.app.current_view {
            View::Signals => {
                let Some(row) = store.signals.selected_row().cloned() else {
                    store.reduce(Action::ShowNotification(Notification::warning(
                        "No signal selected",
                    )));
                    return;
                };

                store.reduce(Action::SendSelectedAlert);
                match self.dispatcher.send_signal_alert(&row).await {
                    Ok(record) => store.reduce(Action::AlertSent(record)),
                    Err(e) => {
                        error!(symbol = %row.symbol, error = %e, "signal alert failed");
                        store.reduce(Action::SetError(format!(
                            "Alert for {} failed: {}",
                            row.symbol, e
                        )));
                    }
                }
            }
            View::News => {
                let Some(item) = NEWS_ITEMS.get(store.news_index) else {
                    return;
                };

                store.reduce(Action::SendSelectedAlert);
                match self.dispatcher.send_news_alert(item).await {
                    Ok(()) => store.reduce(Action::NewsAlertSent),
                    Err(e) => {
                        error!(error = %e, "news alert failed");
                        store.reduce(Action::SetError(format!("News alert failed: {e}")));
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertHistory, MockMessenger};
    use crate::error::Error;
    use crate::market::{IndexChart, MockQuoteSource, PriceSeries};
    use crate::signals::Signal;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx)
    }

    fn history() -> AlertHistory {
        AlertHistory::new(
            std::env::temp_dir().join(format!("nse-cockpit-dash-{}.csv", uuid::Uuid::new_v4())),
        )
    }

    fn source_failing(ticker_to_fail: &'static str) -> MockQuoteSource {
        let mut source = MockQuoteSource::new();
        source.expect_latest_close().returning(move |ticker| {
            if ticker == ticker_to_fail {
                Err(Error::market_data(ticker, "empty chart result"))
            } else {
                Ok(dec!(100.00))
            }
        });
        source
            .expect_history()
            .returning(|ticker| Ok(PriceSeries::new(ticker, Vec::new())));
        source
    }

    fn silent_messenger() -> MockMessenger {
        let mut messenger = MockMessenger::new();
        messenger.expect_send().returning(|_| Ok(()));
        messenger
    }

    #[tokio::test]
    async fn test_refresh_builds_table_without_failed_ticker() {
        let dashboard = Dashboard::new(
            Box::new(source_failing("ICICI.NS")),
            AlertDispatcher::new(Box::new(silent_messenger()), history()),
        );
        let mut store = store();

        dashboard.refresh(&mut store).await;

        assert_eq!(store.signals.len(), TOP_STOCKS.len() - 1);
        assert_eq!(store.signals.skipped()[0].ticker, "ICICI.NS");
        assert_eq!(store.charts.domestic.len(), DOMESTIC_INDICES.len());
        assert_eq!(store.charts.global.len(), GLOBAL_INDICES.len());
        assert!(store.history.loaded);
        assert!(!store.app.loading);
        assert!(store.app.error.is_none());
    }

    #[tokio::test]
    async fn test_chart_failure_surfaces_as_error() {
        let mut source = MockQuoteSource::new();
        source.expect_latest_close().returning(|_| Ok(dec!(50)));
        source
            .expect_history()
            .returning(|ticker| Err(Error::market_data(ticker, "HTTP 503")));

        let dashboard = Dashboard::new(
            Box::new(source),
            AlertDispatcher::new(Box::new(silent_messenger()), history()),
        );
        let mut store = store();
        dashboard.refresh(&mut store).await;

        assert_eq!(store.signals.len(), TOP_STOCKS.len());
        assert!(store.app.error.as_deref().unwrap().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn test_failed_chart_refresh_clears_previous_lines() {
        let mut source = MockQuoteSource::new();
        source.expect_latest_close().returning(|_| Ok(dec!(50)));
        source
            .expect_history()
            .returning(|ticker| match ticker {
                "^DJI" => Err(Error::market_data(ticker, "HTTP 503")),
                _ => Ok(PriceSeries::new(ticker, Vec::new())),
            });

        let dashboard = Dashboard::new(
            Box::new(source),
            AlertDispatcher::new(Box::new(silent_messenger()), history()),
        );
        let mut store = store();
        let stale = vec![IndexChart {
            name: "Dow Jones".to_string(),
            series: PriceSeries::new("^DJI", Vec::new()),
        }];
        store.reduce(Action::ChartsLoaded(ChartGroup::Global, stale));

        dashboard.refresh(&mut store).await;

        assert!(store.charts.global.is_empty());
        assert_eq!(store.charts.domestic.len(), DOMESTIC_INDICES.len());
        assert!(store.app.error.as_deref().unwrap().contains("^DJI"));
    }

    #[tokio::test]
    async fn test_send_selected_signal_records_history() {
        let dashboard = Dashboard::new(
            Box::new(source_failing("none")),
            AlertDispatcher::new(Box::new(silent_messenger()), history()),
        );
        let mut store = store();
        dashboard.refresh(&mut store).await;
        store.reduce(Action::ScrollDown);

        dashboard.send_selected_alert(&mut store).await;

        assert_eq!(store.history.records.len(), 1);
        assert_eq!(store.history.records[0].symbol, "TCS");
        assert_eq!(store.history.records[0].action, Signal::Buy);

        // The file agrees with the in-memory view.
        dashboard.load_history(&mut store);
        assert_eq!(store.history.records.len(), 1);
    }

    #[tokio::test]
    async fn test_send_news_alert_uses_selected_headline() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_send()
            .withf(|text: &str| text == "📰 News Alert:\nRELIANCE quarterly results beat estimates")
            .times(1)
            .returning(|_| Ok(()));

        let dashboard = Dashboard::new(
            Box::new(MockQuoteSource::new()),
            AlertDispatcher::new(Box::new(messenger), history()),
        );
        let mut store = store();
        store.reduce(Action::SetView(View::News));
        store.reduce(Action::ScrollDown);

        dashboard.send_selected_alert(&mut store).await;

        assert!(store.history.records.is_empty());
        assert!(store.app.error.is_none());
    }

    #[tokio::test]
    async fn test_send_failure_shows_error_and_keeps_history_empty() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_send()
            .returning(|_| Err(Error::config("Telegram bot token is not set")));

        let dashboard = Dashboard::new(
            Box::new(source_failing("none")),
            AlertDispatcher::new(Box::new(messenger), history()),
        );
        let mut store = store();
        dashboard.refresh(&mut store).await;
        dashboard.send_selected_alert(&mut store).await;

        assert!(store.history.records.is_empty());
        assert_eq!(
            store.app.error.as_deref(),
            Some("Alert for RELIANCE failed: Configuration error: Telegram bot token is not set")
        );
    }

    #[tokio::test]
    async fn test_send_with_empty_table_warns() {
        let dashboard = Dashboard::new(
            Box::new(MockQuoteSource::new()),
            AlertDispatcher::new(Box::new(MockMessenger::new()), history()),
        );
        let mut store = store();

        dashboard.send_selected_alert(&mut store).await;

        assert_eq!(
            store.app.notification.as_ref().map(|n| n.message.as_str()),
            Some("No signal selected")
        );
    }
}
