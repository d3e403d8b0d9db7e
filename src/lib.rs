//! # NSE Cockpit - a terminal trading dashboard
//!
//! Shows last closes for a fixed list of NSE stocks with placeholder
//! signals, index charts, static news and learning panels, and sends
//! alerts to a Telegram chat. Built with ratatui and reqwest.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the event loop
//! - **Dashboard**: Refresh and alert operations on the store
//! - **Market**: Yahoo chart API client and quote fetching
//! - **Signals**: Signal annotation, the quote table and its projections
//! - **Alerts**: Telegram messaging and the CSV alert history
//! - **State**: Centralized state management
//! - **Events**: Input handling and event processing
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management

pub mod alerts;
pub mod app;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod market;
pub mod signals;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{Error, Result};
