use crate::{
    error::HolocronError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// External translation capability.
///
/// Implementations may fail or time out; callers decide the fallback.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable translator name.
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target`. `source` may be `"auto"`.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, HolocronError>;
}

/// Messaging Channel trait: the transport collaborator.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, HolocronError>;

    /// Send one rendered block back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), HolocronError>;

    /// Send a typing indicator to show the bot is processing.
    async fn send_typing(&self, _target: &str) -> Result<(), HolocronError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), HolocronError>;
}
