//! Quote table and selection state.

use crate::signals::{QuoteRow, QuoteTable, SignalSnapshot, SkippedTicker};
use chrono::{DateTime, Utc};

/// State for the signal-derived panels.
#[derive(Debug, Default)]
pub struct SignalState {
    /// Latest snapshot, if any refresh has completed.
    pub snapshot: Option<SignalSnapshot>,
    /// Selected row on the Signals panel.
    pub selected_index: Option<usize>,
}

impl SignalState {
    /// Replace the snapshot, keeping the selection in range.
    pub fn load(&mut self, snapshot: SignalSnapshot) {
        let len = snapshot.table.len();
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.snapshot = Some(snapshot);
    }

    pub fn table(&self) -> Option<&QuoteTable> {
        self.snapshot.as_ref().map(|s| &s.table)
    }

    pub fn len(&self) -> usize {
        self.table().map_or(0, QuoteTable::len)
    }

    pub fn selected_row(&self) -> Option<&QuoteRow> {
        self.table()?.get(self.selected_index?)
    }

    pub fn skipped(&self) -> &[SkippedTicker] {
        self.snapshot
            .as_ref()
            .map(|s| s.skipped.as_slice())
            .unwrap_or_default()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.snapshot.as_ref().map(|s| s.generated_at)
    }
}
