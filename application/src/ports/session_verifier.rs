//! Session verification port
//!
//! Sessions are issued elsewhere (OAuth or credentials provider); this port
//! only answers whether a presented token belongs to a live session.

pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: &str) -> bool;
}

/// Rejects every token; protected routes always redirect.
pub struct DenyAllSessions;

impl SessionVerifier for DenyAllSessions {
    fn verify(&self, _token: &str) -> bool {
        false
    }
}
