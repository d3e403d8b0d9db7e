//! Market data integration.
//!
//! Quotes and index histories come from a [`QuoteSource`]. The production
//! source is [`YahooClient`]; tests substitute a mock.

mod client;
mod converter;
mod fetcher;
mod series;
pub mod universe;

pub use client::YahooClient;
pub use converter::{ChartResponse, DataConverter};
pub use fetcher::{FetchOutcome, fetch_index_charts, fetch_quotes};
pub use series::{IndexChart, PricePoint, PriceSeries};
pub use universe::{IndexTicker, display_name};

use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A source of end-of-day prices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Latest available daily close for `ticker`, rounded to two decimals.
    async fn latest_close(&self, ticker: &str) -> Result<Decimal>;

    /// Recent daily closes for `ticker`, oldest first.
    async fn history(&self, ticker: &str) -> Result<PriceSeries>;
}
