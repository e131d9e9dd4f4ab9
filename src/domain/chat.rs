// Chat message domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    #[serde(rename = "isBot")]
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_bot(id: u64, text: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            text: text.into(),
            is_bot: true,
            timestamp: Utc::now(),
        }
    }

    pub fn from_user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            text: text.into(),
            is_bot: false,
            timestamp: Utc::now(),
        }
    }
}
