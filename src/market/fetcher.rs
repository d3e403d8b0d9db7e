//! Sequential quote and chart loading.

use super::{IndexChart, IndexTicker, QuoteSource};
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Result of fetching one ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A close price was available.
    Fetched { ticker: String, price: Decimal },
    /// The ticker was left out, with the reason.
    Skipped { ticker: String, reason: String },
}

impl FetchOutcome {
    pub fn ticker(&self) -> &str {
        match self {
            Self::Fetched { ticker, .. } | Self::Skipped { ticker, .. } => ticker,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

/// Fetch the latest close for every ticker, one request at a time.
///
/// A failing ticker never aborts the batch; it comes back as
/// [`FetchOutcome::Skipped`] in its input position.
pub async fn fetch_quotes(source: &dyn QuoteSource, tickers: &[&str]) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::with_capacity(tickers.len());

    for ticker in tickers {
        let outcome = match source.latest_close(ticker).await {
            Ok(price) => FetchOutcome::Fetched {
                ticker: (*ticker).to_string(),
                price,
            },
            Err(e) => {
                warn!(ticker, error = %e, "skipping ticker");
                FetchOutcome::Skipped {
                    ticker: (*ticker).to_string(),
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let fetched = outcomes.iter().filter(|o| o.is_fetched()).count();
    info!(fetched, requested = tickers.len(), "quotes fetched");

    outcomes
}

/// Load history for each index. The first failure is returned to the caller.
pub async fn fetch_index_charts(
    source: &dyn QuoteSource,
    indices: &[IndexTicker],
) -> Result<Vec<IndexChart>> {
    let mut charts = Vec::with_capacity(indices.len());
    for index in indices {
        let series = source.history(index.ticker).await?;
        charts.push(IndexChart {
            name: index.name.to_string(),
            series,
        });
    }
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::market::universe::{DOMESTIC_INDICES, TOP_STOCKS};
    use crate::market::{MockQuoteSource, PriceSeries};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_failed_ticker_is_skipped_in_place() {
        let mut source = MockQuoteSource::new();
        source.expect_latest_close().returning(|ticker| match ticker {
            "TCS.NS" => Err(Error::market_data(ticker, "empty chart result")),
            _ => Ok(dec!(100.00)),
        });

        let outcomes = fetch_quotes(&source, &["RELIANCE.NS", "TCS.NS", "INFY.NS"]).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_fetched());
        assert_eq!(
            outcomes[1],
            FetchOutcome::Skipped {
                ticker: "TCS.NS".to_string(),
                reason: "Market data error for TCS.NS: empty chart result".to_string(),
            }
        );
        assert_eq!(outcomes[2].ticker(), "INFY.NS");
    }

    #[tokio::test]
    async fn test_each_ticker_requested_once() {
        let mut source = MockQuoteSource::new();
        source
            .expect_latest_close()
            .times(TOP_STOCKS.len())
            .returning(|_| Ok(dec!(1)));

        let outcomes = fetch_quotes(&source, TOP_STOCKS).await;
        assert!(outcomes.iter().all(FetchOutcome::is_fetched));
    }

    #[tokio::test]
    async fn test_index_chart_failure_propagates() {
        let mut source = MockQuoteSource::new();
        source.expect_history().returning(|ticker| match ticker {
            "^NSEI" => Ok(PriceSeries::new(ticker, Vec::new())),
            _ => Err(Error::market_data(ticker, "HTTP 500")),
        });

        let result = fetch_index_charts(&source, DOMESTIC_INDICES).await;
        assert!(matches!(result, Err(Error::MarketData { ticker, .. }) if ticker == "^NSEBANK"));
    }

    #[test]
    fn test_index_charts_keep_display_names() {
        let mut source = MockQuoteSource::new();
        source
            .expect_history()
            .returning(|ticker| Ok(PriceSeries::new(ticker, Vec::new())));

        let charts = tokio_test::block_on(fetch_index_charts(&source, DOMESTIC_INDICES)).unwrap();
        let names: Vec<&str> = charts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["NIFTY 50", "BANKNIFTY"]);
    }
}
