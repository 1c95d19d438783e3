use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::markup::MarkupMode;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "telegram").
    pub channel: String,
    /// Platform-specific user ID. Used as the requester id for session state.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// Size class of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Caption attached to an image; bounded by the caption limit.
    Caption,
    /// Standalone text message; bounded by the message limit.
    Text,
}

/// How a block attaches to the block before it when the text is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockJoin {
    /// Starts a new section.
    #[default]
    Piece,
    /// Next line of the same section.
    Line,
    /// Rest of a line that was too long for one block.
    Inline,
}

/// One unit of rendered output handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBlock {
    pub kind: BlockKind,
    pub content: String,
    /// Image reference (URL) shown with a caption block.
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub markup: MarkupMode,
    #[serde(default)]
    pub join: BlockJoin,
}

impl OutputBlock {
    /// A standalone text block.
    pub fn text(content: impl Into<String>, markup: MarkupMode) -> Self {
        Self {
            kind: BlockKind::Text,
            content: content.into(),
            attachment: None,
            markup,
            join: BlockJoin::Piece,
        }
    }

    /// A caption block attached to an image.
    pub fn caption(content: impl Into<String>, image: impl Into<String>, markup: MarkupMode) -> Self {
        Self {
            kind: BlockKind::Caption,
            content: content.into(),
            attachment: Some(image.into()),
            markup,
            join: BlockJoin::Piece,
        }
    }

    pub fn with_join(mut self, join: BlockJoin) -> Self {
        self.join = join;
        self
    }
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub block: OutputBlock,
    /// Platform-specific target for routing (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

impl OutgoingMessage {
    /// Address a rendered block to a reply target.
    pub fn new(block: OutputBlock, reply_target: Option<String>) -> Self {
        Self {
            block,
            reply_target,
        }
    }
}
