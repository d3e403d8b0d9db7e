//! Formats alerts, sends them and records signal alerts.

use super::{AlertHistory, AlertRecord, Messenger};
use crate::error::Result;
use crate::signals::QuoteRow;
use chrono::Utc;
use tracing::info;

/// Message text for a signal alert.
pub fn format_signal_message(row: &QuoteRow) -> String {
    format!(
        "🚀 {action} Alert\nStock: {stock}\nPrice: ₹{price:.2}\nStrategy: {strategy}\nTarget: {target:.2} | SL: {sl:.2}\nConfidence: {confidence}%",
        action = row.action,
        stock = row.symbol,
        price = row.price,
        strategy = row.rationale_label,
        target = row.target_price,
        sl = row.stop_loss,
        confidence = row.confidence,
    )
}

/// Message text for a news alert.
pub fn format_news_message(item: &str) -> String {
    format!("📰 News Alert:\n{item}")
}

/// Sends alerts through a [`Messenger`] and logs signal alerts to history.
pub struct AlertDispatcher {
    messenger: Box<dyn Messenger>,
    history: AlertHistory,
}

impl AlertDispatcher {
    pub fn new(messenger: Box<dyn Messenger>, history: AlertHistory) -> Self {
        Self { messenger, history }
    }

    pub fn history(&self) -> &AlertHistory {
        &self.history
    }

    /// Send a signal alert, then append it to the history.
    ///
    /// Nothing is recorded if the send fails.
    pub async fn send_signal_alert(&self, row: &QuoteRow) -> Result<AlertRecord> {
        let message = format_signal_message(row);
        self.messenger.send(&message).await?;

        let record = AlertRecord {
            timestamp: Utc::now(),
            symbol: row.symbol.clone(),
            action: row.action,
            message,
        };
        self.history.append(&record)?;

        info!(symbol = %row.symbol, action = %row.action, "signal alert sent");
        Ok(record)
    }

    /// Send a news alert. News alerts are not recorded.
    pub async fn send_news_alert(&self, item: &str) -> Result<()> {
        self.messenger.send(&format_news_message(item)).await?;
        info!(item, "news alert sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::MockMessenger;
    use crate::error::Error;
    use crate::signals::{Signal, SignalAnnotator};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn temp_history() -> AlertHistory {
        AlertHistory::new(
            std::env::temp_dir().join(format!("nse-cockpit-alerts-{}.csv", uuid::Uuid::new_v4())),
        )
    }

    #[test]
    fn test_signal_message_format() {
        let row = SignalAnnotator::annotate("RELIANCE.NS", dec!(100.00));
        assert_eq!(
            format_signal_message(&row),
            "🚀 BUY Alert\nStock: RELIANCE\nPrice: ₹100.00\nStrategy: RSI Oversold\nTarget: 101.00 | SL: 99.50\nConfidence: 80%"
        );
    }

    #[tokio::test]
    async fn test_signal_alert_appends_exactly_one_record() {
        let row = SignalAnnotator::annotate("TCS.NS", dec!(3845.65));
        let expected = format_signal_message(&row);

        let mut messenger = MockMessenger::new();
        messenger
            .expect_send()
            .with(eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let dispatcher = AlertDispatcher::new(Box::new(messenger), temp_history());
        let before_call = Utc::now();
        dispatcher.send_signal_alert(&row).await.unwrap();

        let records = dispatcher.history().load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "TCS");
        assert_eq!(records[0].action, Signal::Sell);
        assert_eq!(records[0].message, expected);
        assert!(records[0].timestamp >= before_call);
    }

    #[tokio::test]
    async fn test_failed_send_records_nothing() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_send()
            .returning(|_| Err(Error::messaging("Bad Request: chat not found")));

        let dispatcher = AlertDispatcher::new(Box::new(messenger), temp_history());
        let row = SignalAnnotator::annotate("INFY.NS", dec!(1500.00));

        assert!(dispatcher.send_signal_alert(&row).await.is_err());
        assert!(dispatcher.history().load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_news_alert_is_sent_but_not_recorded() {
        let mut messenger = MockMessenger::new();
        messenger
            .expect_send()
            .with(eq("📰 News Alert:\nRBI policy decision tomorrow".to_string()))
            .times(1)
            .returning(|_| Ok(()));

        let dispatcher = AlertDispatcher::new(Box::new(messenger), temp_history());
        dispatcher
            .send_news_alert("RBI policy decision tomorrow")
            .await
            .unwrap();

        assert!(dispatcher.history().load().unwrap().is_empty());
    }
}
