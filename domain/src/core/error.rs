//! Domain error types

use super::validation::ValidationError;
use crate::persona::entities::PersonaId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Persona not found: {0}")]
    PersonaNotFound(PersonaId),

    #[error("Invalid persona ID: {0}")]
    InvalidPersonaId(String),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Check if this error represents a missing persona
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::PersonaNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DomainError::PersonaNotFound(PersonaId::new(99));
        assert_eq!(error.to_string(), "Persona not found: 99");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::PersonaNotFound(PersonaId::new(1)).is_not_found());
        assert!(!DomainError::EmptyMessage.is_not_found());
        assert!(!DomainError::InvalidPersonaId("abc".to_string()).is_not_found());
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error: DomainError = ValidationError::new("persona", "missing field `name`").into();
        assert_eq!(error.to_string(), "invalid persona: missing field `name`");
    }
}
