//! Chat domain entities

use crate::core::validation::Validated;
use serde::{Deserialize, Serialize};

/// Role of a message in a persona conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
///
/// Messages are never edited after creation; position in the owning list is
/// the only ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Backend-assigned id, absent for locally created messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: None,
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: None,
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

impl Validated for ChatMessage {
    const SUBJECT: &'static str = "chat message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate;
    use serde_json::json;

    #[test]
    fn test_message_wire_shape() {
        let value = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(value, json!({ "role": "user", "content": "hi" }));
    }

    #[test]
    fn test_message_keeps_backend_id() {
        let message: ChatMessage =
            validate(json!({ "id": 12, "role": "assistant", "content": "hello" })).unwrap();
        assert_eq!(message.id, Some(12));
        assert!(!message.is_user());
    }

    #[test]
    fn test_message_rejects_unknown_role() {
        let err = validate::<ChatMessage>(json!({ "role": "system", "content": "x" })).unwrap_err();
        assert_eq!(err.subject(), "chat message");
    }

    #[test]
    fn test_message_requires_content() {
        assert!(validate::<ChatMessage>(json!({ "role": "user" })).is_err());
    }
}
