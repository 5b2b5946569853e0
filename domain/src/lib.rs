//! Domain layer for persona-chat
//!
//! This crate contains the core entities, value objects and state machines.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Persona
//!
//! A configured chat character: identity, description, avatar and an
//! optional system prompt. The detail variant adds a biography and an
//! ordered list of labelled facts.
//!
//! ## Message Map
//!
//! The persisted per-persona conversation history. Each persona id owns
//! exactly one append-only list of [`ChatMessage`]s whose order is the
//! chronological send/receive order.
//!
//! ## Chat Session
//!
//! [`ChatSession`] is the pure state machine behind the chat controller:
//! `Idle` → `Ready` → `AwaitingReply` → `Ready`.

pub mod access;
pub mod chat;
pub mod config;
pub mod core;
pub mod persona;
pub mod pricing;
pub mod session;
pub mod summary;
pub mod util;

// Re-export commonly used types
pub use access::{AccessDecision, AccessPolicy, PatternError, RouteMatcher};
pub use chat::{
    entities::{ChatMessage, Role},
    message_map::MessageMap,
    request::ChatRequest,
    text::MessageText,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    validation::{Validated, ValidationError, validate, validate_list, validate_str},
};
pub use persona::{
    details::DetailMap,
    entities::{Persona, PersonaDetail, PersonaId},
};
pub use pricing::PricingTier;
pub use session::state::{ChatSession, SendRejection, SendTicket, SessionState};
pub use summary::ChatSummary;
