//! Per-persona message history persisted as one JSON document.
//!
//! The whole [`MessageMap`] lives under a single key. Every mutation is a
//! read-modify-write of that document: read the map, change one persona's
//! list, write the map back. There is no locking; the last writer wins.
//!
//! Storage trouble never reaches the caller. Reads degrade to an empty
//! history and writes become logged no-ops.

use crate::ports::key_value_store::KeyValueStore;
use persona_domain::{ChatMessage, MessageMap, PersonaId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Key holding the serialized message map.
pub const MESSAGES_STORAGE_KEY: &str = "persona_chat_messages";

#[derive(Clone)]
pub struct LocalChatStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl LocalChatStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            key: MESSAGES_STORAGE_KEY.to_string(),
        }
    }

    /// Use a different storage key (several stores sharing one backend).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// History for one persona; empty if absent or unreadable.
    pub fn read(&self, persona: PersonaId) -> Vec<ChatMessage> {
        self.read_all().messages(persona).to_vec()
    }

    /// The whole map; empty if absent or unreadable.
    pub fn read_all(&self) -> MessageMap {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return MessageMap::new(),
            Err(e) => {
                warn!("Chat history unavailable, starting empty: {}", e);
                return MessageMap::new();
            }
        };

        match MessageMap::from_json(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("Discarding unreadable chat history: {}", e);
                MessageMap::new()
            }
        }
    }

    /// Replace the entire persisted map.
    pub fn write_all(&self, map: &MessageMap) {
        let raw = match map.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not serialize chat history: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(&self.key, &raw) {
            warn!("Could not persist chat history: {}", e);
        }
    }

    /// Append one message to a persona's history.
    pub fn append(&self, persona: PersonaId, message: ChatMessage) {
        let mut map = self.read_all();
        map.push(persona, message);
        self.write_all(&map);
        debug!(
            "Persisted message for persona {} ({} stored)",
            persona,
            map.messages(persona).len()
        );
    }

    /// Drop a persona's history; other personas are untouched.
    pub fn clear(&self, persona: PersonaId) {
        let mut map = self.read_all();
        if map.clear(persona).is_some() {
            self.write_all(&map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::key_value_store::StorageError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryKv {
        entries: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryKv {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct DisabledKv;

    impl KeyValueStore for DisabledKv {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }
    }

    fn id(n: u32) -> PersonaId {
        PersonaId::new(n)
    }

    #[test]
    fn test_read_without_history_is_empty() {
        let store = LocalChatStore::new(Arc::new(MemoryKv::default()));
        for n in 1..=3 {
            assert!(store.read(id(n)).is_empty());
        }
    }

    #[test]
    fn test_append_is_order_preserving() {
        let store = LocalChatStore::new(Arc::new(MemoryKv::default()));
        store.append(id(1), ChatMessage::user("hi"));
        let before = store.read(id(1));

        store.append(id(1), ChatMessage::assistant("hello"));
        let after = store.read(id(1));

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after.last(), Some(&ChatMessage::assistant("hello")));
    }

    #[test]
    fn test_uses_shared_storage_key() {
        let backend = Arc::new(MemoryKv::default());
        let store = LocalChatStore::new(backend.clone());
        store.append(id(2), ChatMessage::user("x"));

        let raw = backend.get(MESSAGES_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"2":[{"role":"user","content":"x"}]}"#);
    }

    #[test]
    fn test_write_all_replaces_everything() {
        let store = LocalChatStore::new(Arc::new(MemoryKv::default()));
        store.append(id(1), ChatMessage::user("a"));

        let mut map = MessageMap::new();
        map.push(id(2), ChatMessage::user("b"));
        store.write_all(&map);

        assert!(store.read(id(1)).is_empty());
        assert_eq!(store.read(id(2)).len(), 1);
    }

    #[test]
    fn test_clear_keeps_other_personas() {
        let store = LocalChatStore::new(Arc::new(MemoryKv::default()));
        store.append(id(1), ChatMessage::user("a"));
        store.append(id(2), ChatMessage::user("b"));

        store.clear(id(1));
        assert!(store.read(id(1)).is_empty());
        assert_eq!(store.read(id(2)).len(), 1);
    }

    #[test]
    fn test_corrupt_document_reads_as_empty() {
        let backend = Arc::new(MemoryKv::default());
        backend.set(MESSAGES_STORAGE_KEY, "{not json").unwrap();
        let store = LocalChatStore::new(backend);

        assert!(store.read(id(1)).is_empty());
        store.append(id(1), ChatMessage::user("fresh"));
        assert_eq!(store.read(id(1)), vec![ChatMessage::user("fresh")]);
    }

    #[test]
    fn test_disabled_storage_never_fails() {
        let store = LocalChatStore::new(Arc::new(DisabledKv));
        store.append(id(1), ChatMessage::user("lost"));
        store.clear(id(1));
        assert!(store.read(id(1)).is_empty());
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_custom_key_isolates_documents() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryKv::default());
        let a = LocalChatStore::new(backend.clone());
        let b = LocalChatStore::new(backend).with_key("other");
        a.append(id(1), ChatMessage::user("a"));
        assert!(b.read(id(1)).is_empty());
        assert_eq!(b.key(), "other");
    }
}
