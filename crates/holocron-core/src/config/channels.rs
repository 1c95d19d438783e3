use serde::{Deserialize, Serialize};

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub telegram: Option<TelegramConfig>,
}

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Bot token. Empty = read `TELEGRAM_BOT_TOKEN` from the environment.
    #[serde(default)]
    pub bot_token: String,
    /// Allowed Telegram user ids. Empty = allow all.
    #[serde(default)]
    pub allowed_users: Vec<i64>,
}

impl TelegramConfig {
    /// The configured token, or the `TELEGRAM_BOT_TOKEN` env var when unset.
    pub fn resolved_token(&self) -> String {
        if !self.bot_token.is_empty() {
            return self.bot_token.clone();
        }
        std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default()
    }
}
