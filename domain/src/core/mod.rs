//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`validation::ValidationError`]: schema failures at external boundaries

pub mod error;
pub mod validation;
