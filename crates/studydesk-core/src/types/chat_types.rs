//! Chat message types
//!
//! Messages are owned exclusively by the chat panel transcript: they are
//! appended on send/reply/attach and never removed.

use serde::{Deserialize, Serialize};

/// Sender label for user messages
pub const USER_SENDER: &str = "You";
/// Sender label for assistant messages
pub const ASSISTANT_SENDER: &str = "Assistant";

/// Kind of content a chat message carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    File,
    Image,
}

/// A single transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: Option<String>,
    pub is_user: bool,
    pub kind: MessageKind,
    pub file_name: Option<String>,
    pub file_url: Option<String>,
    pub file_mime: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub sender: String,
}

impl ChatMessage {
    /// Text message sent by the user
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::text(text, true)
    }

    /// Text message from the assistant
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::text(text, false)
    }

    fn text(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: Some(text.into()),
            is_user,
            kind: MessageKind::Text,
            file_name: None,
            file_url: None,
            file_mime: None,
            timestamp: chrono::Utc::now(),
            sender: sender_label(is_user).to_string(),
        }
    }

    /// Attachment message; images are distinguished by MIME prefix
    pub fn user_attachment(
        file_name: impl Into<String>,
        file_url: impl Into<String>,
        file_mime: impl Into<String>,
    ) -> Self {
        let file_mime = file_mime.into();
        let kind = if file_mime.starts_with("image/") {
            MessageKind::Image
        } else {
            MessageKind::File
        };

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: None,
            is_user: true,
            kind,
            file_name: Some(file_name.into()),
            file_url: Some(file_url.into()),
            file_mime: Some(file_mime),
            timestamp: chrono::Utc::now(),
            sender: USER_SENDER.to_string(),
        }
    }
}

fn sender_label(is_user: bool) -> &'static str {
    if is_user {
        USER_SENDER
    } else {
        ASSISTANT_SENDER
    }
}
