//! Configuration settings for NSE Cockpit.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the alert history inside the data directory.
const HISTORY_FILE_NAME: &str = "alert_history.csv";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market data source configuration.
    pub market: MarketDataConfig,
    /// Telegram messaging configuration.
    pub telegram: TelegramConfig,
    /// Alert history configuration.
    pub history: HistoryConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from the default location plus environment.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file, layered with `NSE_COCKPIT__*` variables.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from(config_path).required(false))
            .add_source(::config::Environment::with_prefix(super::ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config.with_env_fallback(|key| std::env::var(key).ok()))
    }

    /// Fill unset Telegram credentials from `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID`.
    pub fn with_env_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.telegram.bot_token.is_none() {
            self.telegram.bot_token = lookup("TELEGRAM_BOT_TOKEN");
        }
        if self.telegram.chat_id.is_none() {
            self.telegram.chat_id = lookup("TELEGRAM_CHAT_ID");
        }
        self
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Market data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// Chart API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Range requested for index charts (Yahoo range syntax).
    pub history_range: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) nse-cockpit/0.1".to_string(),
            history_range: "7d".to_string(),
        }
    }
}

/// Telegram Bot API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API base URL.
    pub api_url: String,
    /// Bot token issued by BotFather.
    pub bot_token: Option<String>,
    /// Target chat ID.
    pub chat_id: Option<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.telegram.org".to_string(),
            bot_token: None,
            chat_id: None,
        }
    }
}

impl TelegramConfig {
    /// Whether both credentials are present.
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

/// Alert history configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path to the CSV history file. Defaults to the data directory.
    pub path: Option<PathBuf>,
}

impl HistoryConfig {
    /// Resolve the history file path.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            super::data_dir()
                .map(|p| p.join(HISTORY_FILE_NAME))
                .unwrap_or_else(|_| PathBuf::from(HISTORY_FILE_NAME))
        })
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Show the key hint line under the panels.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            show_help_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Refetch quotes, charts and history.
    pub refresh: String,
    /// Next tab.
    pub next_tab: String,
    /// Previous tab.
    pub prev_tab: String,
    /// Move selection up.
    pub up: String,
    /// Move selection down.
    pub down: String,
    /// Send an alert for the selected item.
    pub send: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            next_tab: "l".to_string(),
            prev_tab: "h".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            send: "s".to_string(),
        }
    }
}
