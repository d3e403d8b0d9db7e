//! Placeholder signal generation and the quote table.
//!
//! Fetched prices are annotated with a parity-based action and fixed
//! confidence, then collected into a [`QuoteTable`] ordered by confidence.
//! The rule is a stand-in for a real model and makes no market claim.

mod annotator;
pub mod projection;
mod signal;
mod table;

pub use annotator::{CONFIDENCE, SignalAnnotator};
pub use signal::{QuoteRow, Signal};
pub use table::QuoteTable;

use crate::market::FetchOutcome;
use chrono::{DateTime, Utc};

/// A ticker that produced no row, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: String,
}

/// Everything one refresh produced for the signal panels.
#[derive(Debug, Clone)]
pub struct SignalSnapshot {
    pub table: QuoteTable,
    pub skipped: Vec<SkippedTicker>,
    pub generated_at: DateTime<Utc>,
}

impl SignalSnapshot {
    /// Annotate fetched prices and build the table; skipped tickers are kept aside.
    pub fn from_outcomes(outcomes: Vec<FetchOutcome>) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for outcome in outcomes {
            match outcome {
                FetchOutcome::Fetched { ticker, price } => {
                    rows.push(SignalAnnotator::annotate(&ticker, price));
                }
                FetchOutcome::Skipped { ticker, reason } => {
                    skipped.push(SkippedTicker { ticker, reason });
                }
            }
        }

        Self {
            table: QuoteTable::build(rows),
            skipped,
            generated_at: Utc::now(),
        }
    }
}
