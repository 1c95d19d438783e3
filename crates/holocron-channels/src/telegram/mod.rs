//! Telegram Bot API channel.
//!
//! Uses long polling via `getUpdates`, `sendMessage` for text blocks and
//! `sendPhoto` (by URL) for caption blocks.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
pub(crate) mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use holocron_core::config::TelegramConfig;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Telegram's hard limit for a single text message, in characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Telegram channel using the Bot API with long polling.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
    /// Tracks the last update_id to avoid reprocessing.
    last_update_id: Arc<Mutex<Option<i64>>>,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config. The token falls back to
    /// `TELEGRAM_BOT_TOKEN` when the config leaves it empty.
    pub fn new(config: TelegramConfig) -> Self {
        let base_url = format!("https://api.telegram.org/bot{}", config.resolved_token());
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
            last_update_id: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether a token is available at all.
    pub fn has_token(&self) -> bool {
        !self.config.resolved_token().is_empty()
    }
}
