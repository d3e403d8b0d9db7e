//! Alert history state.

use crate::alerts::AlertRecord;

/// Records read from the history file.
#[derive(Debug, Default)]
pub struct HistoryState {
    pub records: Vec<AlertRecord>,
    /// Whether the file has been read at least once.
    pub loaded: bool,
    /// Selected record on the history panel.
    pub selected_index: Option<usize>,
}

impl HistoryState {
    pub fn load(&mut self, records: Vec<AlertRecord>) {
        self.selected_index = match records.len() {
            0 => None,
            len => Some(self.selected_index.unwrap_or(0).min(len - 1)),
        };
        self.records = records;
        self.loaded = true;
    }

    pub fn push(&mut self, record: AlertRecord) {
        self.records.push(record);
        self.selected_index.get_or_insert(0);
    }
}
