//! Message text value object

use serde::{Deserialize, Serialize};

/// Text a user is about to send (Value Object)
///
/// Guaranteed to contain at least one non-whitespace character. The content
/// itself is kept verbatim, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText {
    content: String,
}

impl MessageText {
    /// Try to create message text, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for MessageText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_blank() {
        assert!(MessageText::try_new("").is_none());
        assert!(MessageText::try_new("   ").is_none());
        assert!(MessageText::try_new("\n\t").is_none());
    }

    #[test]
    fn test_try_new_keeps_content_verbatim() {
        let text = MessageText::try_new("  hi ").unwrap();
        assert_eq!(text.content(), "  hi ");
    }
}
