//! Alert delivery and the alert history log.

mod dispatcher;
mod history;
mod telegram;

pub use dispatcher::{AlertDispatcher, format_news_message, format_signal_message};
pub use history::{AlertHistory, AlertRecord};
pub use telegram::TelegramMessenger;

use crate::error::Result;
use async_trait::async_trait;

/// An outbound text channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a plain-text message.
    async fn send(&self, text: &str) -> Result<()>;
}
