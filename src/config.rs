//! Configuration management with TOML files and environment overrides.

use crate::monitor::evaluate::MatchMode;
use crate::monitor::models::{ProductSpec, Target};
use crate::notify::TelegramConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration: the desired product, the targets to
/// check, and the notification credentials.
///
/// Unlike a tool that can fall back to defaults, a monitor with no
/// targets has nothing to do, so a missing or malformed config file is
/// a fatal startup error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Compare option labels case-insensitively (default: exact match).
    #[serde(default)]
    pub case_insensitive: bool,

    /// The desired variant, shared across all targets.
    pub product: ProductSpec,

    /// Telegram credentials; absent means notifications are disabled.
    #[serde(default)]
    pub telegram: Option<TelegramConfig>,

    /// Pages to check, in order.
    pub targets: Vec<Target>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("deal-agent.toml");
        if local_config.exists() {
            debug!("Found deal-agent.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("deal-agent").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        anyhow::bail!(
            "No configuration file found. Pass --config, or create deal-agent.toml \
            in the current directory."
        )
    }

    /// Applies `TELEGRAM_TOKEN` / `TELEGRAM_CHAT_ID` environment
    /// overrides. When the config file has no `[telegram]` table, both
    /// variables together enable notifications.
    pub fn with_env(mut self) -> Self {
        let token = std::env::var("TELEGRAM_TOKEN").ok();
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok();

        match &mut self.telegram {
            Some(telegram) => {
                if let Some(token) = token {
                    telegram.bot_token = token;
                }
                if let Some(chat_id) = chat_id {
                    telegram.chat_id = chat_id;
                }
            }
            None => {
                if let (Some(bot_token), Some(chat_id)) = (token, chat_id) {
                    self.telegram = Some(TelegramConfig { bot_token, chat_id });
                }
            }
        }

        self
    }

    /// The evaluator's comparison mode.
    pub fn match_mode(&self) -> MatchMode {
        if self.case_insensitive {
            MatchMode::IgnoreCase
        } else {
            MatchMode::Exact
        }
    }
}
