//! The fixed set of tickers the dashboard tracks.

/// Suffix Yahoo uses for NSE listings.
pub const EXCHANGE_SUFFIX: &str = ".NS";

/// Equities shown in the signal panels, in display order before sorting.
pub const TOP_STOCKS: &[&str] = &[
    "RELIANCE.NS",
    "TCS.NS",
    "HDFC.NS",
    "INFY.NS",
    "ICICI.NS",
    "SBIN.NS",
    "HINDUNILVR.NS",
];

/// A named index and its chart ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTicker {
    pub name: &'static str,
    pub ticker: &'static str,
}

/// Indices for the Index Analysis panel.
pub const DOMESTIC_INDICES: &[IndexTicker] = &[
    IndexTicker {
        name: "NIFTY 50",
        ticker: "^NSEI",
    },
    IndexTicker {
        name: "BANKNIFTY",
        ticker: "^NSEBANK",
    },
];

/// Indices for the Global Markets panel.
pub const GLOBAL_INDICES: &[IndexTicker] = &[
    IndexTicker {
        name: "Dow Jones",
        ticker: "^DJI",
    },
    IndexTicker {
        name: "Nasdaq",
        ticker: "^IXIC",
    },
    IndexTicker {
        name: "S&P 500",
        ticker: "^GSPC",
    },
];

/// Display name for a ticker: the symbol without the exchange suffix.
pub fn display_name(ticker: &str) -> &str {
    ticker.strip_suffix(EXCHANGE_SUFFIX).unwrap_or(ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_exchange_suffix() {
        assert_eq!(display_name("RELIANCE.NS"), "RELIANCE");
        assert_eq!(display_name("^NSEI"), "^NSEI");
    }

    #[test]
    fn test_universe_has_no_duplicate_tickers() {
        let mut tickers: Vec<&str> = TOP_STOCKS.to_vec();
        tickers.sort_unstable();
        tickers.dedup();
        assert_eq!(tickers.len(), TOP_STOCKS.len());
    }
}
