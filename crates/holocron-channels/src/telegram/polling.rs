//! Long-polling update loop and Channel trait implementation.

use super::types::{TgMessage, TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use holocron_core::{
    error::HolocronError,
    message::{BlockKind, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const MAX_BACKOFF_SECS: u64 = 60;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, HolocronError> {
        if !self.has_token() {
            return Err(HolocronError::Channel(
                "telegram bot token missing (set channel.telegram.bot_token or TELEGRAM_BOT_TOKEN)"
                    .into(),
            ));
        }
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let allowed_users = self.config.allowed_users.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let last = last_update_id.lock().await;
                let offset = last.map(|id| id + 1);
                drop(last);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        backoff_secs = back_off(backoff_secs).await;
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        backoff_secs = back_off(backoff_secs).await;
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    backoff_secs = back_off(backoff_secs).await;
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let Some(msg) = update.message else {
                        continue;
                    };
                    let Some(incoming) = to_incoming(msg, &allowed_users) else {
                        continue;
                    };
                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), HolocronError> {
        let chat_id = parse_chat_id(message.reply_target.as_deref())?;
        let block = message.block;
        match (block.kind, block.attachment.as_deref()) {
            (BlockKind::Caption, Some(image)) => {
                if let Err(e) = self
                    .send_photo_url(chat_id, image, &block.content, block.markup)
                    .await
                {
                    warn!("photo delivery failed, sending caption as text: {e}");
                    if block.content.is_empty() {
                        return Ok(());
                    }
                    self.send_text(chat_id, &block.content, block.markup).await?;
                }
                Ok(())
            }
            _ => self.send_text(chat_id, &block.content, block.markup).await,
        }
    }

    async fn send_typing(&self, target: &str) -> Result<(), HolocronError> {
        let chat_id = parse_chat_id(Some(target))?;
        self.send_chat_action(chat_id, "typing").await
    }

    async fn stop(&self) -> Result<(), HolocronError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

/// Sleep for the current backoff and return the next one.
async fn back_off(current: u64) -> u64 {
    tokio::time::sleep(Duration::from_secs(current)).await;
    (current * 2).min(MAX_BACKOFF_SECS)
}

fn parse_chat_id(target: Option<&str>) -> Result<i64, HolocronError> {
    let target =
        target.ok_or_else(|| HolocronError::Channel("no reply_target on outgoing message".into()))?;
    target
        .parse()
        .map_err(|e| HolocronError::Channel(format!("invalid telegram chat_id '{target}': {e}")))
}

/// Convert a Telegram message into an incoming message, dropping non-text
/// updates and unauthorized senders.
pub(crate) fn to_incoming(msg: TgMessage, allowed_users: &[i64]) -> Option<IncomingMessage> {
    let text = msg.text?;
    let user = msg.from?;

    // Auth check.
    if !allowed_users.is_empty() && !allowed_users.contains(&user.id) {
        warn!("ignoring message from unauthorized user {}", user.id);
        return None;
    }
    debug!("telegram: message from {} in chat {}", user.id, msg.chat.id);

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        sender_name: Some(user.display_name()),
        text,
        timestamp: chrono::Utc::now(),
        reply_target: Some(msg.chat.id.to_string()),
    })
}
