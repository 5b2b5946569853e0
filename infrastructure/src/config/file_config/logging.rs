//! Logging configuration from TOML (`[logging]` section)

use super::client::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// directory = "~/.local/state/persona-chat/logs"
/// conversation_log = "~/.local/state/persona-chat/conversation.jsonl"
/// ```
///
/// Both are off when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated operation logs
    pub directory: Option<String>,
    /// JSONL conversation transcript
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(expand_tilde)
    }

    pub fn resolved_conversation_log(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_tilde)
    }
}
