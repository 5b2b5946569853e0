//! Access decisions for incoming requests.

use super::matcher::{PatternError, RouteMatcher};

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Send the visitor to the sign-in route; `location` carries the
    /// original target as `callbackUrl`.
    RedirectToSignIn { location: String },
}

/// Which routes require a session
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    sign_in_path: String,
    protected: Vec<RouteMatcher>,
}

impl AccessPolicy {
    pub fn new(sign_in_path: impl Into<String>, protected: Vec<RouteMatcher>) -> Self {
        Self {
            sign_in_path: sign_in_path.into(),
            protected,
        }
    }

    /// Build from pattern strings, failing on the first malformed one.
    pub fn from_patterns<S: AsRef<str>>(
        sign_in_path: impl Into<String>,
        patterns: &[S],
    ) -> Result<Self, PatternError> {
        let protected = patterns
            .iter()
            .map(|p| RouteMatcher::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(sign_in_path, protected))
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    pub fn protected(&self) -> &[RouteMatcher] {
        &self.protected
    }

    /// Whether `path` requires a session. The sign-in route never does.
    pub fn is_protected(&self, path: &str) -> bool {
        path != self.sign_in_path && self.protected.iter().any(|m| m.matches(path))
    }

    /// Decide for a request target (`path` plus optional `?query`).
    pub fn decide(&self, target: &str, authenticated: bool) -> AccessDecision {
        let path = target.split('?').next().unwrap_or(target);
        if authenticated || !self.is_protected(path) {
            return AccessDecision::Allow;
        }
        AccessDecision::RedirectToSignIn {
            location: format!(
                "{}?callbackUrl={}",
                self.sign_in_path,
                urlencoding::encode(target)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::from_patterns(
            "/auth/signin",
            &["/dashboard/:path*", "/chat/:path*", "/chat"],
        )
        .unwrap()
    }

    #[test]
    fn test_public_paths_are_allowed() {
        let policy = policy();
        assert_eq!(policy.decide("/api/personas", false), AccessDecision::Allow);
        assert_eq!(policy.decide("/pricing", false), AccessDecision::Allow);
    }

    #[test]
    fn test_authenticated_visitors_pass() {
        assert_eq!(policy().decide("/dashboard", true), AccessDecision::Allow);
    }

    #[test]
    fn test_anonymous_visitor_is_redirected_with_callback() {
        let decision = policy().decide("/chat/persona/1?x=1", false);
        assert_eq!(
            decision,
            AccessDecision::RedirectToSignIn {
                location: "/auth/signin?callbackUrl=%2Fchat%2Fpersona%2F1%3Fx%3D1".to_string()
            }
        );
    }

    #[test]
    fn test_sign_in_route_is_never_protected() {
        let policy = AccessPolicy::from_patterns("/auth/signin", &["/auth/:path*"]).unwrap();
        assert!(!policy.is_protected("/auth/signin"));
        assert!(policy.is_protected("/auth/other"));
    }

    #[test]
    fn test_malformed_pattern_is_reported() {
        let err = AccessPolicy::from_patterns("/auth/signin", &["dashboard"]).unwrap_err();
        assert_eq!(err.pattern, "dashboard");
    }

    #[test]
    fn test_callback_encodes_utf8_and_reserved_characters() {
        assert_eq!(
            policy().decide("/chat/聊?a=1&b", false),
            AccessDecision::RedirectToSignIn {
                location: "/auth/signin?callbackUrl=%2Fchat%2F%E8%81%8A%3Fa%3D1%26b".to_string()
            }
        );
    }
}
