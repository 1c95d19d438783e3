//! Telegram Bot API deserialization types.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgMessage {
    pub from: Option<TgUser>,
    pub chat: TgChat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl TgUser {
    /// `@username`, else the full name.
    pub fn display_name(&self) -> String {
        if let Some(ref un) = self.username {
            format!("@{un}")
        } else if let Some(ref ln) = self.last_name {
            format!("{} {ln}", self.first_name)
        } else {
            self.first_name.clone()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgChat {
    pub id: i64,
}
