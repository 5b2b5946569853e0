//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversions into runtime types return the value together with any
//! [`ConfigIssue`]s found along the way.

mod auth;
mod client;
mod logging;
mod mock;
mod server;

pub use auth::{DEFAULT_COOKIE_NAME, DEFAULT_PROTECTED_PATHS, DEFAULT_SIGN_IN_PATH, FileAuthConfig};
pub use client::FileClientConfig;
pub use logging::FileLoggingConfig;
pub use mock::FileMockConfig;
pub use server::FileServerConfig;

use persona_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Access gate settings
    pub auth: FileAuthConfig,
    /// Mock backend timings
    pub mock: FileMockConfig,
    /// Chat client settings
    pub client: FileClientConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Protected route patterns and the sign-in path
    /// 2. Blank session tokens
    /// 3. Inverted reply delay range
    /// 4. Empty fallback reply
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.auth.to_access_policy().1);
        issues.extend(self.auth.parse_session_tokens().1);
        issues.extend(self.mock.to_reply_delay().1);
        issues.extend(self.client.to_chat_behavior().1);

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_domain::ConfigIssueCode;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080

[auth]
session_tokens = ["dev-token"]
protected_paths = ["/chat"]

[mock]
reply_delay_min_ms = 0
reply_delay_max_ms = 0

[client]
api_base_url = "http://localhost:8080"
session_token = "dev-token"

[logging]
conversation_log = "/tmp/conversation.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.auth.session_tokens, vec!["dev-token".to_string()]);
        assert_eq!(config.auth.protected_paths, vec!["/chat".to_string()]);
        // Unset keys in a present section keep their defaults
        assert_eq!(config.auth.cookie_name, "persona_chat_session");
        assert_eq!(config.mock.personas_delay_ms, 500);
        assert_eq!(config.client.session_token(), Some("dev-token"));
        assert!(config.logging.directory.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[server]\nport = 4000\n").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.auth, FileAuthConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.auth.sign_in_path, "/auth/signin");
        assert_eq!(config.client.fallback_reply, "抱歉，出错了。");
        assert_eq!(config.auth.protected_paths.len(), DEFAULT_PROTECTED_PATHS.len());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.auth.protected_paths.push("chat".to_string());
        config.auth.session_tokens = vec![String::new()];
        config.mock.reply_delay_min_ms = 10;
        config.mock.reply_delay_max_ms = 1;
        config.client.fallback_reply = " ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidPattern { .. }));
        assert!(matches!(issues[1].code, ConfigIssueCode::EmptyValue { .. }));
        assert!(matches!(issues[2].code, ConfigIssueCode::InvertedRange { .. }));
        assert!(matches!(issues[3].code, ConfigIssueCode::EmptyValue { .. }));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }
}
