//! Conversion of Yahoo chart responses into internal types.

use super::{PricePoint, PriceSeries};
use crate::error::{Error, Result};
use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level body of `/v8/finance/chart/{ticker}`.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Converts chart responses to internal types.
pub struct DataConverter;

impl DataConverter {
    /// Latest non-null close, rounded to two decimals.
    pub fn latest_close(ticker: &str, response: ChartResponse) -> Result<Decimal> {
        let result = Self::first_result(ticker, response)?;
        result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.iter().rev().find_map(|c| c.and_then(to_price)))
            .ok_or_else(|| Error::market_data(ticker, "no close price in response"))
    }

    /// All non-null closes paired with their timestamps.
    pub fn price_series(ticker: &str, response: ChartResponse) -> Result<PriceSeries> {
        let result = Self::first_result(ticker, response)?;
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let points = result
            .timestamp
            .iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                Some(PricePoint {
                    timestamp: DateTime::from_timestamp(*ts, 0)?,
                    close: close.and_then(to_price)?,
                })
            })
            .collect();

        Ok(PriceSeries::new(ticker, points))
    }

    fn first_result(ticker: &str, response: ChartResponse) -> Result<ChartResult> {
        if let Some(err) = response.chart.error {
            let reason = match err.description {
                Some(description) => format!("{}: {}", err.code, description),
                None => err.code,
            };
            return Err(Error::market_data(ticker, reason));
        }

        response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| Error::market_data(ticker, "empty chart result"))
    }
}

fn to_price(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(2))
}
