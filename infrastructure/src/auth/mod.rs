//! Session verification against a fixed token list

use persona_application::ports::session_verifier::SessionVerifier;
use std::collections::HashSet;

/// Accepts exactly the configured tokens. Blank entries are ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionVerifier {
    tokens: HashSet<String>,
}

impl StaticSessionVerifier {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.trim().is_empty())
            .collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl SessionVerifier for StaticSessionVerifier {
    fn verify(&self, token: &str) -> bool {
        !token.is_empty() && self.tokens.contains(token)
    }
}
