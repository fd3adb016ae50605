//! Dashboard chat log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

/// One message in the dashboard chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Message author
    pub sender: ChatSender,
    /// Message text
    pub text: String,
    /// When the message was added
    pub at: DateTime<Utc>,
}

/// Session-scoped message history
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatSender::User, text.into());
    }

    /// Append an assistant message
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(ChatSender::Bot, text.into());
    }

    fn push(&mut self, sender: ChatSender, text: String) {
        self.entries.push(ChatEntry {
            id: Uuid::new_v4(),
            sender,
            text,
            at: Utc::now(),
        });
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
