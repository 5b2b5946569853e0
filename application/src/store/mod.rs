//! Local chat store: per-persona history on top of a [`KeyValueStore`].
//!
//! [`KeyValueStore`]: crate::ports::key_value_store::KeyValueStore

mod local_chat_store;

pub use local_chat_store::{LocalChatStore, MESSAGES_STORAGE_KEY};
