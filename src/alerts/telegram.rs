//! Telegram Bot API messenger.

use super::Messenger;
use crate::config::TelegramConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages through `sendMessage`.
#[derive(Debug, Clone)]
pub struct TelegramMessenger {
    config: TelegramConfig,
    http: reqwest::Client,
}

impl TelegramMessenger {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Endpoint for the configured bot.
    fn send_url(&self, token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            token
        )
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let token = self
            .config
            .bot_token
            .as_deref()
            .ok_or_else(|| Error::config("Telegram bot token is not set"))?;
        let chat_id = self
            .config
            .chat_id
            .as_deref()
            .ok_or_else(|| Error::config("Telegram chat ID is not set"))?;
        Ok((token, chat_id))
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        let (token, chat_id) = self.credentials()?;

        let response = self
            .http
            .post(self.send_url(token))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if let Err(e) = check_reply(status, &body) {
            error!(%status, error = %e, "Telegram rejected message");
            return Err(e);
        }

        info!(chat_id, "Telegram message sent");
        Ok(())
    }
}

/// Interpret a `sendMessage` reply.
///
/// Error pages from proxies are often not JSON; those fall back to the
/// HTTP status.
fn check_reply(status: StatusCode, body: &str) -> Result<()> {
    match serde_json::from_str::<BotApiResponse>(body) {
        Ok(reply) if reply.ok && status.is_success() => Ok(()),
        Ok(reply) => Err(Error::messaging(
            reply
                .description
                .unwrap_or_else(|| format!("HTTP {status}")),
        )),
        Err(_) if !status.is_success() => Err(Error::messaging(format!("HTTP {status}"))),
        Err(e) => Err(e.into()),
    }
}
