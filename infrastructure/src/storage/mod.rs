//! Key-value storage adapters
//!
//! Implementations of the [`KeyValueStore`](persona_application::KeyValueStore)
//! port: a volatile in-memory map for tests and the server, and a JSON file for
//! the chat REPL.

mod json_file;
mod memory;

pub use json_file::JsonFileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
