//! Column and row selections for the tabular panels.

use super::{QuoteRow, QuoteTable};

/// Number of rows on the recommendations panel.
pub const RECOMMENDATION_COUNT: usize = 5;

/// A titled grid of display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn project(
        title: &'static str,
        headers: &'static [&'static str],
        rows: &[QuoteRow],
        cells: impl Fn(&QuoteRow) -> Vec<String>,
    ) -> Self {
        Self {
            title,
            headers,
            rows: rows.iter().map(cells).collect(),
        }
    }
}

fn price(value: rust_decimal::Decimal) -> String {
    format!("{value:.2}")
}

/// Options strategy per stock.
pub fn options_view(table: &QuoteTable) -> TableView {
    TableView::project(
        "Options Strategies",
        &["Stock", "Options_Strategy", "Signal", "Price", "Target", "SL"],
        table.rows(),
        |r| {
            vec![
                r.symbol.clone(),
                r.options_label.to_string(),
                r.action.to_string(),
                price(r.price),
                price(r.target_price),
                price(r.stop_loss),
            ]
        },
    )
}

/// Predicted action and next-day estimate.
pub fn predictions_view(table: &QuoteTable) -> TableView {
    TableView::project(
        "ML Predictions",
        &["Stock", "Predicted_Action", "Confidence", "Next_Day_Price"],
        table.rows(),
        |r| {
            vec![
                r.symbol.clone(),
                r.predicted_action.to_string(),
                format!("{}%", r.confidence),
                price(r.predicted_next_price),
            ]
        },
    )
}

/// The highest-confidence rows.
pub fn recommendations_view(table: &QuoteTable) -> TableView {
    TableView::project(
        "Stock Recommendations",
        &["Stock", "Signal", "Price", "Target", "SL", "Confidence"],
        table.top(RECOMMENDATION_COUNT),
        |r| {
            vec![
                r.symbol.clone(),
                r.action.to_string(),
                price(r.price),
                price(r.target_price),
                price(r.stop_loss),
                format!("{}%", r.confidence),
            ]
        },
    )
}
