//! Message sending: text, photos by URL, chat actions, and command registration.

use super::{TelegramChannel, TELEGRAM_MESSAGE_LIMIT};
use crate::utils::split_message;
use holocron_core::{error::HolocronError, markup::MarkupMode};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Bot commands shown in Telegram's autocomplete menu.
pub(crate) const BOT_COMMANDS: &[(&str, &str)] = &[
    ("start", "Introduction and usage"),
    ("help", "How to look up a character"),
    ("language", "Show or set your language"),
    ("status", "Catalog and translation status"),
];

/// `sendMessage` body. `parse_mode` is only set for markup-carrying text.
pub(crate) fn message_body(chat_id: i64, text: &str, markup: MarkupMode) -> Value {
    let mut body = json!({
        "chat_id": chat_id,
        "text": text,
        "disable_web_page_preview": true,
    });
    if let Some(mode) = markup.parse_mode() {
        body["parse_mode"] = json!(mode);
    }
    body
}

/// `sendPhoto` body referencing the image by URL.
pub(crate) fn photo_body(chat_id: i64, image_url: &str, caption: &str, markup: MarkupMode) -> Value {
    let mut body = json!({
        "chat_id": chat_id,
        "photo": image_url,
    });
    if !caption.is_empty() {
        body["caption"] = json!(caption);
        if let Some(mode) = markup.parse_mode() {
            body["parse_mode"] = json!(mode);
        }
    }
    body
}

pub(crate) fn commands_body() -> Value {
    let commands: Vec<Value> = BOT_COMMANDS
        .iter()
        .map(|(command, description)| json!({ "command": command, "description": description }))
        .collect();
    json!({ "commands": commands })
}

impl TelegramChannel {
    /// Send a text block. Markup that Telegram rejects is retried as plain text.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        markup: MarkupMode,
    ) -> Result<(), HolocronError> {
        let url = format!("{}/sendMessage", self.base_url);

        for chunk in split_message(text, TELEGRAM_MESSAGE_LIMIT) {
            let resp = self
                .client
                .post(&url)
                .json(&message_body(chat_id, chunk, markup))
                .send()
                .await
                .map_err(|e| HolocronError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if status.is_success() {
                continue;
            }
            let error_text = resp.text().await.unwrap_or_default();
            if markup == MarkupMode::Plain || !error_text.contains("can't parse entities") {
                return Err(HolocronError::Channel(format!(
                    "telegram send failed ({status}): {error_text}"
                )));
            }

            warn!("HTML parse failed, retrying as plain text: {error_text}");
            let plain_resp = self
                .client
                .post(&url)
                .json(&message_body(chat_id, chunk, MarkupMode::Plain))
                .send()
                .await
                .map_err(|e| HolocronError::Channel(format!("telegram send (plain) failed: {e}")))?;
            if !plain_resp.status().is_success() {
                let plain_err = plain_resp.text().await.unwrap_or_default();
                return Err(HolocronError::Channel(format!(
                    "telegram send (plain fallback) failed: {plain_err}"
                )));
            }
        }

        Ok(())
    }

    /// Send a photo by URL with a caption.
    pub(crate) async fn send_photo_url(
        &self,
        chat_id: i64,
        image_url: &str,
        caption: &str,
        markup: MarkupMode,
    ) -> Result<(), HolocronError> {
        let url = format!("{}/sendPhoto", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&photo_body(chat_id, image_url, caption, markup))
            .send()
            .await
            .map_err(|e| HolocronError::Channel(format!("telegram sendPhoto failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(HolocronError::Channel(format!(
                "telegram sendPhoto failed ({status}): {error_text}"
            )));
        }

        Ok(())
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands_body()).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn send_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), HolocronError> {
        let url = format!("{}/sendChatAction", self.base_url);
        let body = json!({
            "chat_id": chat_id,
            "action": action,
        });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| HolocronError::Channel(format!("telegram sendChatAction failed: {e}")))?;

        Ok(())
    }
}
