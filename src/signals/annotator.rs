//! Price-only signal annotation.

use super::{QuoteRow, Signal};
use crate::market::display_name;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Confidence attached to every signal.
pub const CONFIDENCE: u8 = 80;

const TARGET_FACTOR: Decimal = dec!(1.01);
const STOP_LOSS_FACTOR: Decimal = dec!(0.995);
const NEXT_DAY_FACTOR: Decimal = dec!(1.002);
const PRICE_DP: u32 = 2;

/// Derives a [`QuoteRow`] from a ticker and its close.
pub struct SignalAnnotator;

impl SignalAnnotator {
    /// Annotate a price. Pure; never fails.
    pub fn annotate(ticker: &str, price: Decimal) -> QuoteRow {
        let price = price.round_dp(PRICE_DP);
        let action = Self::action_for(price);

        QuoteRow {
            symbol: display_name(ticker).to_string(),
            price,
            action,
            target_price: (price * TARGET_FACTOR).round_dp(PRICE_DP),
            stop_loss: (price * STOP_LOSS_FACTOR).round_dp(PRICE_DP),
            confidence: CONFIDENCE,
            rationale_label: action.rationale_label(),
            options_label: action.options_label(),
            predicted_action: action,
            predicted_next_price: (price * NEXT_DAY_FACTOR).round_dp(PRICE_DP),
        }
    }

    /// BUY when the two-decimal price is an even whole number, SELL otherwise.
    pub fn action_for(price: Decimal) -> Signal {
        if (price.round_dp(PRICE_DP) % Decimal::TWO).is_zero() {
            Signal::Buy
        } else {
            Signal::Sell
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_hundred_is_buy() {
        let row = SignalAnnotator::annotate("RELIANCE.NS", dec!(100.00));
        assert_eq!(row.symbol, "RELIANCE");
        assert_eq!(row.action, Signal::Buy);
        assert_eq!(row.target_price, dec!(101.00));
        assert_eq!(row.stop_loss, dec!(99.50));
        assert_eq!(row.predicted_next_price, dec!(100.20));
        assert_eq!(row.confidence, 80);
        assert_eq!(row.rationale_label, "RSI Oversold");
        assert_eq!(row.options_label, "Straddle");
        assert_eq!(row.predicted_action, Signal::Buy);
    }

    #[test]
    fn test_odd_and_fractional_prices_are_sell() {
        assert_eq!(SignalAnnotator::action_for(dec!(101.00)), Signal::Sell);
        assert_eq!(SignalAnnotator::action_for(dec!(100.50)), Signal::Sell);
        assert_eq!(SignalAnnotator::action_for(dec!(3512.02)), Signal::Sell);
    }

    #[test]
    fn test_parity_uses_two_decimal_rounding() {
        // 1999.999 rounds up to 2000.00
        assert_eq!(SignalAnnotator::action_for(dec!(1999.999)), Signal::Buy);
        // 2000.004 rounds down to 2000.00
        assert_eq!(SignalAnnotator::action_for(dec!(2000.004)), Signal::Buy);
        assert_eq!(SignalAnnotator::action_for(dec!(2000.01)), Signal::Sell);
    }

    #[test]
    fn test_sell_labels() {
        let row = SignalAnnotator::annotate("TCS.NS", dec!(3845.65));
        assert_eq!(row.action, Signal::Sell);
        assert_eq!(row.rationale_label, "MACD Cross");
        assert_eq!(row.options_label, "Strangle");
        assert_eq!(row.predicted_action, Signal::Sell);
    }

    #[test]
    fn test_derived_prices_round_to_two_decimals() {
        let row = SignalAnnotator::annotate("INFY.NS", dec!(123.45));
        // 124.6845, 122.83275, 123.6969
        assert_eq!(row.target_price, dec!(124.68));
        assert_eq!(row.stop_loss, dec!(122.83));
        assert_eq!(row.predicted_next_price, dec!(123.70));
    }

    #[test]
    fn test_many_even_prices_are_buy() {
        for whole in (2..=5000).step_by(2) {
            let price = Decimal::from(whole);
            assert_eq!(SignalAnnotator::action_for(price), Signal::Buy, "{price}");
            assert_eq!(
                SignalAnnotator::action_for(price + Decimal::ONE),
                Signal::Sell,
                "{price}"
            );
        }
    }
}
