// Command result handed back to the dispatcher for rendering

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Info,
    Error,
}

/// Serialized as `{"type":"message","messageType":"info","content":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "message", rename_all = "camelCase")]
pub struct CommandOutput {
    pub message_type: MessageType,
    pub content: String,
}

impl CommandOutput {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Info,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            content: content.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.message_type == MessageType::Error
    }
}
