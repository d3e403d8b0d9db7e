//! Error types for the NSE Cockpit application.

use thiserror::Error;

/// The main error type for NSE Cockpit.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Alert history file errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The market data source had nothing usable for a ticker.
    #[error("Market data error for {ticker}: {reason}")]
    MarketData { ticker: String, reason: String },

    /// Messaging endpoint rejected or failed a send.
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new market data error for a ticker.
    pub fn market_data(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MarketData {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create a new messaging error.
    pub fn messaging(msg: impl Into<String>) -> Self {
        Self::Messaging(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }
}
