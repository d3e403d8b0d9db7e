//! Price history for chart panels.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

/// Daily closes for one ticker, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series from points.
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            ticker: ticker.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Most recent close.
    pub fn last_close(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.close)
    }

    /// Lowest and highest close.
    pub fn bounds(&self) -> Option<(Decimal, Decimal)> {
        let first = self.points.first()?.close;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(p.close), hi.max(p.close))),
        )
    }

    /// Percent change from the first to the last close.
    pub fn change_percent(&self) -> Option<Decimal> {
        let first = self.points.first()?.close;
        let last = self.points.last()?.close;
        if first.is_zero() {
            return None;
        }
        Some(((last - first) / first * Decimal::ONE_HUNDRED).round_dp(2))
    }

    /// `(index, close)` pairs for plotting.
    pub fn chart_data(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.close.to_f64().map(|close| (i as f64, close)))
            .collect()
    }
}

/// A named index with its loaded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexChart {
    pub name: String,
    pub series: PriceSeries,
}
