//! Chat client configuration from TOML (`[client]` section)

use persona_application::ChatBehavior;
use persona_domain::chat::TRANSPORT_FALLBACK_REPLY;
use persona_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw chat client configuration from TOML
///
/// # Example
///
/// ```toml
/// [client]
/// api_base_url = "http://127.0.0.1:3000"
/// storage_path = "~/.local/share/persona-chat/storage.json"
/// fallback_reply = "抱歉，出错了。"
/// session_token = "dev-token"
/// history_file = "~/.local/share/persona-chat/history.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Root of the persona-chat HTTP API
    pub api_base_url: String,
    /// Chat history file (defaults to the platform data directory)
    pub storage_path: Option<String>,
    /// Assistant message shown when a reply fails
    pub fallback_reply: String,
    /// Session token sent as a bearer token
    pub session_token: Option<String>,
    /// REPL line history (defaults to the platform data directory)
    pub history_file: Option<String>,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            storage_path: None,
            fallback_reply: TRANSPORT_FALLBACK_REPLY.to_string(),
            session_token: None,
            history_file: None,
        }
    }
}

impl FileClientConfig {
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        match &self.storage_path {
            Some(path) => Some(expand_tilde(path)),
            None => data_file("storage.json"),
        }
    }

    pub fn resolved_history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_tilde(path)),
            None => data_file("history.txt"),
        }
    }

    /// Session token, if set and not blank.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn to_chat_behavior(&self) -> (ChatBehavior, Vec<ConfigIssue>) {
        if self.fallback_reply.trim().is_empty() {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "client.fallback_reply".to_string(),
                },
                "client.fallback_reply is empty, falling back to the default message",
            );
            return (ChatBehavior::default(), vec![issue]);
        }
        (
            ChatBehavior::default().with_fallback_reply(self.fallback_reply.clone()),
            vec![],
        )
    }
}

fn data_file(name: &str) -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("persona-chat").join(name))
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_live_under_data_dir() {
        let config = FileClientConfig::default();
        if let Some(path) = config.resolved_storage_path() {
            assert!(path.ends_with("persona-chat/storage.json"));
        }
        if let Some(path) = config.resolved_history_path() {
            assert!(path.ends_with("persona-chat/history.txt"));
        }
    }

    #[test]
    fn test_explicit_storage_path() {
        let config = FileClientConfig {
            storage_path: Some("/tmp/chat.json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_storage_path(), Some(PathBuf::from("/tmp/chat.json")));
    }

    #[test]
    fn test_blank_session_token_is_none() {
        let config = FileClientConfig {
            session_token: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.session_token(), None);
    }

    #[test]
    fn test_empty_fallback_uses_default() {
        let config = FileClientConfig {
            fallback_reply: String::new(),
            ..Default::default()
        };
        let (behavior, issues) = config.to_chat_behavior();
        assert_eq!(behavior, ChatBehavior::default());
        assert_eq!(issues.len(), 1);
    }
}
