//! Access gate configuration from TOML (`[auth]` section)

use persona_domain::{AccessPolicy, ConfigIssue, ConfigIssueCode, RouteMatcher};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COOKIE_NAME: &str = "persona_chat_session";
pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/signin";

/// Route patterns that require a session unless configured otherwise.
pub const DEFAULT_PROTECTED_PATHS: &[&str] =
    &["/dashboard/:path*", "/chat/:path*", "/chat", "/api/user/:path*"];

/// Raw access gate configuration from TOML
///
/// # Example
///
/// ```toml
/// [auth]
/// cookie_name = "persona_chat_session"
/// session_tokens = ["dev-token"]
/// sign_in_path = "/auth/signin"
/// protected_paths = ["/dashboard/:path*", "/chat/:path*", "/chat"]
/// ```
///
/// Sessions are issued elsewhere; `session_tokens` lists the ones the server
/// accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Cookie carrying the session token
    pub cookie_name: String,
    /// Accepted session tokens
    pub session_tokens: Vec<String>,
    /// Where unauthenticated requests are redirected
    pub sign_in_path: String,
    /// Route patterns behind the gate
    pub protected_paths: Vec<String>,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            session_tokens: Vec::new(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            protected_paths: DEFAULT_PROTECTED_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl FileAuthConfig {
    /// Build the access policy, skipping patterns that do not parse.
    pub fn to_access_policy(&self) -> (AccessPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut matchers = Vec::new();

        for pattern in &self.protected_paths {
            match RouteMatcher::parse(pattern) {
                Ok(m) => matchers.push(m),
                Err(e) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidPattern {
                        field: "auth.protected_paths".to_string(),
                        value: pattern.clone(),
                    },
                    format!("auth.protected_paths: {}", e),
                )),
            }
        }

        let sign_in = if self.sign_in_path.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "auth.sign_in_path".to_string(),
                },
                format!(
                    "auth.sign_in_path is empty, falling back to '{}'",
                    DEFAULT_SIGN_IN_PATH
                ),
            ));
            DEFAULT_SIGN_IN_PATH.to_string()
        } else {
            self.sign_in_path.clone()
        };

        (AccessPolicy::new(sign_in, matchers), issues)
    }

    /// Non-blank session tokens, warning about blank ones.
    pub fn parse_session_tokens(&self) -> (Vec<String>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut tokens = Vec::new();
        for (i, token) in self.session_tokens.iter().enumerate() {
            if token.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: format!("auth.session_tokens[{}]", i),
                    },
                    format!("auth.session_tokens[{}] is empty and will be ignored", i),
                ));
            } else {
                tokens.push(token.clone());
            }
        }
        (tokens, issues)
    }
}
