//! Infrastructure layer for persona-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod http;
pub mod logging;
pub mod reply;
pub mod storage;

// Re-export commonly used types
pub use auth::StaticSessionVerifier;
pub use catalog::{CatalogLatency, StaticCatalog};
pub use config::{
    ConfigLoader, FileAuthConfig, FileClientConfig, FileConfig, FileLoggingConfig,
    FileMockConfig, FileServerConfig,
};
pub use http::HttpApiClient;
pub use logging::JsonlConversationLogger;
pub use reply::{CannedReplies, MockReplyService, ReplyDelay};
pub use storage::{InMemoryKeyValueStore, JsonFileKeyValueStore};
