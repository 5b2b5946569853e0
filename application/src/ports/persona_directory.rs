//! Read-only catalog ports
//!
//! Defines the interfaces for the persona directory and the other read-only
//! collections the client consumes (dashboard summaries, pricing tiers).

use async_trait::async_trait;
use persona_domain::{ChatSummary, Persona, PersonaDetail, PersonaId, PricingTier, ValidationError};
use thiserror::Error;

/// Errors from read-only catalogs
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Persona not found: {0}")]
    NotFound(PersonaId),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}

/// Persona directory
#[async_trait]
pub trait PersonaDirectory: Send + Sync {
    /// All personas, in display order
    async fn list(&self) -> Result<Vec<Persona>, DirectoryError>;

    /// One persona with its profile details
    async fn get(&self, id: PersonaId) -> Result<PersonaDetail, DirectoryError>;
}

/// Source of dashboard chat summaries
#[async_trait]
pub trait ChatSummarySource: Send + Sync {
    /// Recent conversations, most recently updated first
    async fn recent_chats(&self) -> Result<Vec<ChatSummary>, DirectoryError>;
}

/// Membership pricing catalog
#[async_trait]
pub trait PricingCatalog: Send + Sync {
    async fn tiers(&self) -> Result<Vec<PricingTier>, DirectoryError>;
}
