//! Reply service port
//!
//! Defines how the chat controller obtains an assistant reply for a user
//! message.

use async_trait::async_trait;
use persona_domain::{ChatMessage, PersonaId, ValidationError};
use thiserror::Error;

/// Errors that can occur while requesting a reply
#[derive(Error, Debug)]
pub enum ReplyError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Produces assistant replies
///
/// The returned message always carries `Role::Assistant`. Implementations
/// may take arbitrarily long; callers apply no timeout.
#[async_trait]
pub trait ReplyService: Send + Sync {
    async fn reply(&self, persona: PersonaId, text: &str) -> Result<ChatMessage, ReplyError>;
}
