//! Static text for the News & Events and Learning Hub panels.

/// Headlines on the News & Events panel.
pub const NEWS_ITEMS: &[&str] = &[
    "NIFTY opens 50 pts higher on global cues",
    "RELIANCE quarterly results beat estimates",
    "RBI policy decision tomorrow",
];

/// A titled group of short explanations.
pub struct LearningSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const LEARNING_HUB: &[LearningSection] = &[
    LearningSection {
        title: "Indicators Explained",
        entries: &[
            ("RSI", "Relative Strength Index"),
            ("MACD", "Moving Average Convergence Divergence"),
            ("Bollinger Bands", "Price volatility measure"),
        ],
    },
    LearningSection {
        title: "Strategies",
        entries: &[
            ("Straddle", "Buy a call and a put at the same strike"),
            ("Strangle", "Buy an out-of-the-money call and put"),
            ("Iron Condor", "Sell a strangle, buy wings to cap risk"),
        ],
    },
];
