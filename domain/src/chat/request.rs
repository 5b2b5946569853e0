//! Reply request body

use crate::core::validation::Validated;
use crate::persona::entities::PersonaId;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/chat`
///
/// Clients have historically sent `persona_id` both as a number and as a
/// numeric string; both forms are accepted, a number is always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(deserialize_with = "persona_id_lenient")]
    pub persona_id: PersonaId,
}

impl ChatRequest {
    pub fn new(persona_id: PersonaId, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            persona_id,
        }
    }
}

impl Validated for ChatRequest {
    const SUBJECT: &'static str = "chat request";
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPersonaId {
    Number(u32),
    Text(String),
}

fn persona_id_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PersonaId, D::Error> {
    match RawPersonaId::deserialize(deserializer)? {
        RawPersonaId::Number(n) => Ok(PersonaId::new(n)),
        RawPersonaId::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate;
    use serde_json::json;

    #[test]
    fn test_accepts_numeric_persona_id() {
        let req: ChatRequest = validate(json!({ "message": "hi", "persona_id": 1 })).unwrap();
        assert_eq!(req.persona_id, PersonaId::new(1));
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn test_accepts_string_persona_id() {
        let req: ChatRequest = validate(json!({ "message": "hi", "persona_id": "2" })).unwrap();
        assert_eq!(req.persona_id, PersonaId::new(2));
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        assert!(validate::<ChatRequest>(json!({ "persona_id": 1 })).is_err());
        assert!(validate::<ChatRequest>(json!({ "message": "hi" })).is_err());
        assert!(validate::<ChatRequest>(json!({ "message": 5, "persona_id": 1 })).is_err());
        assert!(validate::<ChatRequest>(json!({ "message": "hi", "persona_id": "one" })).is_err());
        assert!(validate::<ChatRequest>(json!({ "message": "hi", "persona_id": -3 })).is_err());
    }

    #[test]
    fn test_serializes_numeric_persona_id() {
        let value = serde_json::to_value(ChatRequest::new(PersonaId::new(3), "x")).unwrap();
        assert_eq!(value, json!({ "message": "x", "persona_id": 3 }));
    }
}
