//! Application layer for persona-chat
//!
//! This crate contains the Local Chat Store, the Chat Session Controller,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatBehavior;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    key_value_store::{KeyValueStore, StorageError},
    persona_directory::{ChatSummarySource, DirectoryError, PersonaDirectory, PricingCatalog},
    reply_service::{ReplyError, ReplyService},
    session_verifier::{DenyAllSessions, SessionVerifier},
};
pub use store::{LocalChatStore, MESSAGES_STORAGE_KEY};
pub use use_cases::chat_session::{ChatSessionController, SendOutcome, SessionError, SessionSnapshot};
