//! Per-persona message histories.
//!
//! The map is the only persisted chat state. It is stored as one JSON object
//! whose keys are stringified persona ids and whose values are arrays of
//! `{role, content}` messages:
//!
//! ```json
//! {"1": [{"role": "user", "content": "hi"}, {"role": "assistant", "content": "..."}]}
//! ```

use super::entities::ChatMessage;
use crate::core::validation::{Validated, ValidationError, validate_str};
use crate::persona::entities::PersonaId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageMap(BTreeMap<String, Vec<ChatMessage>>);

impl MessageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// History for a persona; empty when none was ever recorded.
    pub fn messages(&self, persona: PersonaId) -> &[ChatMessage] {
        self.0
            .get(&persona.storage_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append to a persona's list, creating it on first use.
    pub fn push(&mut self, persona: PersonaId, message: ChatMessage) {
        self.0
            .entry(persona.storage_key())
            .or_default()
            .push(message);
    }

    /// Replace a persona's whole list.
    pub fn replace(&mut self, persona: PersonaId, messages: Vec<ChatMessage>) {
        self.0.insert(persona.storage_key(), messages);
    }

    /// Remove a persona's list, returning what was stored.
    pub fn clear(&mut self, persona: PersonaId) -> Option<Vec<ChatMessage>> {
        self.0.remove(&persona.storage_key())
    }

    /// Number of personas with a stored list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChatMessage])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        validate_str(raw)
    }
}

impl Validated for MessageMap {
    const SUBJECT: &'static str = "message map";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> PersonaId {
        PersonaId::new(n)
    }

    #[test]
    fn test_absent_persona_is_empty() {
        let map = MessageMap::new();
        assert!(map.messages(id(1)).is_empty());
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut map = MessageMap::new();
        map.push(id(1), ChatMessage::user("a"));
        map.push(id(1), ChatMessage::assistant("b"));
        map.push(id(2), ChatMessage::user("c"));

        let contents: Vec<_> = map.messages(id(1)).iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
        assert_eq!(map.messages(id(2)).len(), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_clear_only_touches_one_persona() {
        let mut map = MessageMap::new();
        map.push(id(1), ChatMessage::user("a"));
        map.push(id(2), ChatMessage::user("b"));

        let removed = map.clear(id(1)).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(map.messages(id(1)).is_empty());
        assert_eq!(map.messages(id(2)).len(), 1);
    }

    #[test]
    fn test_json_round_trip_preserves_sequences() {
        let mut map = MessageMap::new();
        for i in 0..5 {
            map.push(id(1), ChatMessage::user(format!("u{i}")));
            map.push(id(1), ChatMessage::assistant(format!("a{i}")));
        }
        map.push(id(3), ChatMessage::user("other"));

        let restored = MessageMap::from_json(&map.to_json().unwrap()).unwrap();
        assert_eq!(restored, map);
        assert_eq!(restored.messages(id(1)), map.messages(id(1)));
    }

    #[test]
    fn test_storage_format_uses_string_keys() {
        let mut map = MessageMap::new();
        map.push(id(7), ChatMessage::user("hi"));
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"7":[{"role":"user","content":"hi"}]}"#
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(MessageMap::from_json(r#"{"1": "not a list"}"#).is_err());
        assert!(MessageMap::from_json(r#"[1, 2]"#).is_err());
    }
}
