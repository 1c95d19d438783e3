//! # holocron-channels
//!
//! Messaging transports. Each one turns platform updates into
//! `IncomingMessage`s and delivers rendered `OutputBlock`s.

pub mod telegram;
pub(crate) mod utils;

pub use telegram::TelegramChannel;
