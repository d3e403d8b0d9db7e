//! Append-only CSV log of sent signal alerts.

use crate::error::Result;
use crate::signals::Signal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One line of the history file: timestamp, symbol, action, message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub action: Signal,
    pub message: String,
}

/// The history file. Records are never rewritten or removed.
#[derive(Debug, Clone)]
pub struct AlertHistory {
    path: PathBuf,
}

impl AlertHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file and its directory if needed.
    pub fn append(&self, record: &AlertRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(path = %self.path.display(), symbol = %record.symbol, "alert recorded");
        Ok(())
    }

    /// Read every record. A missing file means no alerts have been sent.
    pub fn load(&self) -> Result<Vec<AlertRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);
        let records = reader
            .deserialize::<AlertRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_history() -> AlertHistory {
        AlertHistory::new(
            std::env::temp_dir()
                .join(format!("nse-cockpit-{}", uuid::Uuid::new_v4()))
                .join("alert_history.csv"),
        )
    }

    fn record(symbol: &str, action: Signal) -> AlertRecord {
        AlertRecord {
            timestamp: Utc::now(),
            symbol: symbol.to_string(),
            action,
            message: format!("🚀 {action} Alert\nStock: {symbol}\nConfidence: 80%"),
        }
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let history = temp_history();
        assert!(history.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_multiline_messages() {
        let history = temp_history();
        let first = record("RELIANCE", Signal::Buy);
        let second = record("TCS", Signal::Sell);

        history.append(&first).unwrap();
        history.append(&second).unwrap();

        assert_eq!(history.load().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_file_has_no_header_row() {
        let history = temp_history();
        history.append(&record("SBIN", Signal::Buy)).unwrap();

        let contents = std::fs::read_to_string(history.path()).unwrap();
        assert!(!contents.starts_with("timestamp"));
        assert!(contents.contains(",SBIN,BUY,"));
    }
}
