//! Index chart state.

use crate::market::IndexChart;

/// Which chart panel a set of charts belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartGroup {
    Domestic,
    Global,
}

/// Loaded index histories for both chart panels.
#[derive(Debug, Default)]
pub struct ChartState {
    pub domestic: Vec<IndexChart>,
    pub global: Vec<IndexChart>,
}

impl ChartState {
    pub fn set(&mut self, group: ChartGroup, charts: Vec<IndexChart>) {
        match group {
            ChartGroup::Domestic => self.domestic = charts,
            ChartGroup::Global => self.global = charts,
        }
    }

    pub fn group(&self, group: ChartGroup) -> &[IndexChart] {
        match group {
            ChartGroup::Domestic => &self.domestic,
            ChartGroup::Global => &self.global,
        }
    }
}
