//! Key-value storage port
//!
//! The persistence seam of the chat store: a flat string → string store with
//! the same shape as browser local storage. All access is synchronous.

use thiserror::Error;

/// Errors raised by storage adapters
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage: {0}")]
    Corrupt(String),
}

/// String key-value store
///
/// Implementations live in the infrastructure layer (in-memory, JSON file).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
