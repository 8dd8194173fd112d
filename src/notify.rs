//! Telegram notification channel.
//!
//! Delivery is best-effort: the run controller logs a failed send and
//! moves on, since there is no secondary alerting channel to escalate
//! to.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Default Telegram Bot API endpoint.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Telegram bot credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Trait for message delivery - enables recording notifiers in tests.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Delivers one text message to the operator.
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Sends messages through the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    config: TelegramConfig,
}

impl TelegramNotifier {
    /// Creates a notifier against the production Telegram API.
    pub fn new(config: TelegramConfig) -> Result<Self> {
        Self::with_api_base(config, TELEGRAM_API_BASE.to_string())
    }

    /// Creates a notifier with a custom API base URL (for testing).
    pub fn with_api_base(config: TelegramConfig, api_base: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build Telegram HTTP client")?;

        Ok(Self { client, api_base, config })
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.config.bot_token);
        let body = format!(
            "chat_id={}&text={}",
            urlencoding::encode(&self.config.chat_id),
            urlencoding::encode(text)
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .context("Failed to reach Telegram API")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Telegram API returned status {}", status);
        }

        debug!("Notification delivered ({} chars)", text.len());
        Ok(())
    }
}

/// The configured notification channel, or an explicit no-op when
/// credentials are absent.
pub enum Notifier {
    Telegram(TelegramNotifier),
    Disabled,
}

impl Notifier {
    /// Builds the channel from config: present credentials enable
    /// Telegram, absent credentials disable sending entirely.
    pub fn from_config(config: Option<TelegramConfig>) -> Result<Self> {
        match config {
            Some(config) => Ok(Self::Telegram(TelegramNotifier::new(config)?)),
            None => Ok(Self::Disabled),
        }
    }
}

#[async_trait]
impl Notify for Notifier {
    async fn notify(&self, text: &str) -> Result<()> {
        match self {
            Notifier::Telegram(telegram) => telegram.notify(text).await,
            Notifier::Disabled => {
                info!("Telegram not configured, skipping notification");
                Ok(())
            }
        }
    }
}
