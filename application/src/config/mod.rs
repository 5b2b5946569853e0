//! Application-level configuration.
//!
//! - [`ChatBehavior`]: how the chat controller degrades when a reply fails

use persona_domain::chat::TRANSPORT_FALLBACK_REPLY;
use serde::{Deserialize, Serialize};

/// Chat controller behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBehavior {
    /// Assistant message appended in place of a failed reply.
    pub fallback_reply: String,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            fallback_reply: TRANSPORT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl ChatBehavior {
    pub fn with_fallback_reply(mut self, reply: impl Into<String>) -> Self {
        self.fallback_reply = reply.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback() {
        assert_eq!(ChatBehavior::default().fallback_reply, "抱歉，出错了。");
    }

    #[test]
    fn test_with_fallback_reply() {
        let behavior = ChatBehavior::default().with_fallback_reply("oops");
        assert_eq!(behavior.fallback_reply, "oops");
    }
}
