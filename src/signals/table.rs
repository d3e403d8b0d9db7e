//! The ordered quote table.

use super::QuoteRow;

/// Quote rows ordered by confidence, highest first.
///
/// Rows of equal confidence keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteTable {
    rows: Vec<QuoteRow>,
}

impl QuoteTable {
    /// Build a table from annotated rows.
    pub fn build(mut rows: Vec<QuoteRow>) -> Self {
        // `sort_by` is stable.
        rows.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        Self { rows }
    }

    pub fn rows(&self) -> &[QuoteRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuoteRow> {
        self.rows.get(index)
    }

    /// The first `n` rows, or all rows if there are fewer.
    pub fn top(&self, n: usize) -> &[QuoteRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalAnnotator;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn row(ticker: &str, confidence: u8) -> QuoteRow {
        QuoteRow {
            confidence,
            ..SignalAnnotator::annotate(ticker, dec!(250.00))
        }
    }

    fn symbols(rows: &[QuoteRow]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_equal_confidence_keeps_input_order() {
        let table = QuoteTable::build(vec![
            row("RELIANCE.NS", 80),
            row("TCS.NS", 80),
            row("INFY.NS", 80),
        ]);
        assert_eq!(symbols(table.rows()), vec!["RELIANCE", "TCS", "INFY"]);
    }

    #[test]
    fn test_sorted_by_confidence_descending() {
        let table = QuoteTable::build(vec![
            row("SBIN.NS", 40),
            row("TCS.NS", 90),
            row("INFY.NS", 40),
            row("ICICI.NS", 65),
        ]);
        assert_eq!(symbols(table.rows()), vec!["TCS", "ICICI", "SBIN", "INFY"]);
        assert!(
            table
                .rows()
                .windows(2)
                .all(|w| w[0].confidence >= w[1].confidence)
        );
    }

    #[test]
    fn test_top_is_bounded_by_length() {
        let rows: Vec<QuoteRow> = ["A.NS", "B.NS", "C.NS", "D.NS", "E.NS", "F.NS", "G.NS"]
            .iter()
            .map(|t| row(t, 80))
            .collect();
        let table = QuoteTable::build(rows);
        assert_eq!(symbols(table.top(5)), vec!["A", "B", "C", "D", "E"]);

        let small = QuoteTable::build(vec![row("A.NS", 80), row("B.NS", 80)]);
        assert_eq!(small.top(5).len(), 2);
        assert!(QuoteTable::default().top(5).is_empty());
    }

    #[test]
    fn test_duplicate_symbols_are_kept() {
        let table = QuoteTable::build(vec![row("TCS.NS", 80), row("TCS.NS", 80)]);
        assert_eq!(table.len(), 2);
    }
}
