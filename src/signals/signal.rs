//! Signal and quote row types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Suggested action for a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Indicator named as the rationale for this action.
    pub fn rationale_label(&self) -> &'static str {
        match self {
            Self::Buy => "RSI Oversold",
            Self::Sell => "MACD Cross",
        }
    }

    /// Options strategy shown alongside this action.
    pub fn options_label(&self) -> &'static str {
        match self {
            Self::Buy => "Straddle",
            Self::Sell => "Strangle",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotated quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    /// Display symbol, without exchange suffix.
    pub symbol: String,
    /// Latest close, two decimals.
    pub price: Decimal,
    pub action: Signal,
    pub target_price: Decimal,
    pub stop_loss: Decimal,
    /// Percentage, 0-100.
    pub confidence: u8,
    pub rationale_label: &'static str,
    pub options_label: &'static str,
    pub predicted_action: Signal,
    pub predicted_next_price: Decimal,
}
