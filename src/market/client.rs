//! Yahoo Finance chart API client.

use super::{ChartResponse, DataConverter, PriceSeries, QuoteSource};
use crate::config::MarketDataConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::debug;

/// Range requested when only the latest close is needed.
const LATEST_RANGE: &str = "1d";
const DAILY_INTERVAL: &str = "1d";

/// HTTP client for end-of-day prices.
#[derive(Debug, Clone)]
pub struct YahooClient {
    config: MarketDataConfig,
    http: reqwest::Client,
}

impl YahooClient {
    /// Create a new client.
    pub fn new(config: MarketDataConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    /// Chart endpoint URL for a ticker.
    pub fn chart_url(&self, ticker: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.config.base_url.trim_end_matches('/'),
            encode_ticker(ticker)
        )
    }

    async fn fetch_chart(&self, ticker: &str, range: &str) -> Result<ChartResponse> {
        let url = self.chart_url(ticker);
        debug!(%url, range, "fetching chart");

        let response = self
            .http
            .get(&url)
            .query(&[("range", range), ("interval", DAILY_INTERVAL)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Yahoo reports unknown tickers as a 404 with a JSON chart error body.
        match serde_json::from_str::<ChartResponse>(&body) {
            Ok(chart) => Ok(chart),
            Err(_) if !status.is_success() => {
                Err(Error::market_data(ticker, format!("HTTP {status}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl QuoteSource for YahooClient {
    async fn latest_close(&self, ticker: &str) -> Result<Decimal> {
        let chart = self.fetch_chart(ticker, LATEST_RANGE).await?;
        DataConverter::latest_close(ticker, chart)
    }

    async fn history(&self, ticker: &str) -> Result<PriceSeries> {
        let chart = self.fetch_chart(ticker, &self.config.history_range).await?;
        DataConverter::price_series(ticker, chart)
    }
}

/// Index tickers start with `^`, which must be escaped in a path segment.
fn encode_ticker(ticker: &str) -> String {
    ticker.replace('^', "%5E")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_url_for_equity() {
        let client = YahooClient::new(MarketDataConfig::default()).unwrap();
        assert_eq!(
            client.chart_url("TCS.NS"),
            "https://query1.finance.yahoo.com/v8/finance/chart/TCS.NS"
        );
    }

    #[test]
    fn test_chart_url_escapes_index_caret() {
        let config = MarketDataConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..MarketDataConfig::default()
        };
        let client = YahooClient::new(config).unwrap();
        assert_eq!(
            client.chart_url("^NSEBANK"),
            "http://localhost:8080/v8/finance/chart/%5ENSEBANK"
        );
    }
}
