//! Application-level state.

use super::Notification;

/// The dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signals,
    OptionsStrategies,
    Predictions,
    IndexAnalysis,
    Recommendations,
    News,
    LearningHub,
    GlobalMarkets,
    History,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Signals,
        View::OptionsStrategies,
        View::Predictions,
        View::IndexAnalysis,
        View::Recommendations,
        View::News,
        View::LearningHub,
        View::GlobalMarkets,
        View::History,
    ];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Signals => "Signals",
            Self::OptionsStrategies => "Options Strategies",
            Self::Predictions => "Predictions",
            Self::IndexAnalysis => "Index Analysis",
            Self::Recommendations => "Stock Recommendations",
            Self::News => "News & Events",
            Self::LearningHub => "Learning Hub",
            Self::GlobalMarkets => "Global Markets",
            Self::History => "Alerts History",
        }
    }

    /// Short label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Signals => "Signals",
            Self::OptionsStrategies => "Options",
            Self::Predictions => "Predictions",
            Self::IndexAnalysis => "Indices",
            Self::Recommendations => "Top Picks",
            Self::News => "News",
            Self::LearningHub => "Learn",
            Self::GlobalMarkets => "Global",
            Self::History => "History",
        }
    }

    /// Zero-based tab position.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// View for a 1-based tab number.
    pub fn from_number(n: u32) -> Option<Self> {
        let i = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(i).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether a refresh or send is in progress.
    pub loading: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}
