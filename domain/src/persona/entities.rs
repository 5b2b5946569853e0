//! Persona entities

use super::details::DetailMap;
use crate::core::error::DomainError;
use crate::core::validation::Validated;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable numeric identifier of a persona (Value Object)
///
/// Serialized as a bare integer. The string form doubles as the key of the
/// persona's history in the [`MessageMap`](crate::MessageMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(u32);

impl PersonaId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Key under which this persona's history is stored.
    pub fn storage_key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PersonaId)
            .map_err(|_| DomainError::InvalidPersonaId(s.to_string()))
    }
}

impl From<u32> for PersonaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A chat character as listed in the directory (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
    pub description: String,
    /// Avatar image URI
    #[serde(alias = "avatar_url")]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Persona {
    pub fn new(
        id: impl Into<PersonaId>,
        name: impl Into<String>,
        description: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            avatar: avatar.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

impl Validated for Persona {
    const SUBJECT: &'static str = "persona";

    fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.avatar.trim().is_empty() {
            return Err("avatar must not be empty".to_string());
        }
        Ok(())
    }
}

/// Persona with profile details (Entity)
///
/// Serializes flat: the summary fields sit next to `bio` and `details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaDetail {
    #[serde(flatten)]
    pub persona: Persona,
    pub bio: String,
    #[serde(default)]
    pub details: DetailMap,
}

impl PersonaDetail {
    pub fn new(persona: Persona, bio: impl Into<String>, details: DetailMap) -> Self {
        Self {
            persona,
            bio: bio.into(),
            details,
        }
    }

    pub fn id(&self) -> PersonaId {
        self.persona.id
    }

    pub fn name(&self) -> &str {
        &self.persona.name
    }

    /// Drop the profile fields, keeping the list-view record.
    pub fn summary(&self) -> Persona {
        self.persona.clone()
    }
}

impl Validated for PersonaDetail {
    const SUBJECT: &'static str = "persona detail";

    fn check(&self) -> Result<(), String> {
        self.persona.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate;
    use serde_json::json;

    #[test]
    fn test_persona_id_from_str() {
        assert_eq!("42".parse::<PersonaId>().unwrap(), PersonaId::new(42));
        assert_eq!(" 7 ".parse::<PersonaId>().unwrap(), PersonaId::new(7));
        assert!("abc".parse::<PersonaId>().is_err());
        assert!("-1".parse::<PersonaId>().is_err());
        assert!("".parse::<PersonaId>().is_err());
    }

    #[test]
    fn test_persona_id_serializes_as_integer() {
        assert_eq!(serde_json::to_value(PersonaId::new(3)).unwrap(), json!(3));
        assert_eq!(PersonaId::new(3).storage_key(), "3");
    }

    #[test]
    fn test_persona_omits_missing_system_prompt() {
        let persona = Persona::new(1, "Lapwing", "desc", "/avatars/lapwing.jpg");
        let value = serde_json::to_value(&persona).unwrap();
        assert!(value.get("system_prompt").is_none());
        assert_eq!(value["avatar"], "/avatars/lapwing.jpg");
    }

    #[test]
    fn test_persona_accepts_avatar_url_alias() {
        let persona: Persona = validate(json!({
            "id": 2,
            "name": "Nia",
            "description": "desc",
            "avatar_url": "/avatars/nia.jpg"
        }))
        .unwrap();
        assert_eq!(persona.avatar, "/avatars/nia.jpg");
    }

    #[test]
    fn test_persona_rejects_blank_name() {
        let err = validate::<Persona>(json!({
            "id": 2,
            "name": "  ",
            "description": "desc",
            "avatar": "/a.jpg"
        }))
        .unwrap_err();
        assert_eq!(err.reason(), "name must not be empty");
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = PersonaDetail::new(
            Persona::new(3, "Momoi", "playwright", "/avatars/ssby.jpg"),
            "Born in Stratford",
            [("职业", "剧作家")].into_iter().collect(),
        );
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Momoi");
        assert_eq!(value["bio"], "Born in Stratford");
        assert_eq!(value["details"]["职业"], "剧作家");
    }

    #[test]
    fn test_summary_list_payload_accepts_detail_fields() {
        // A detail record is a valid summary record: extra fields are ignored.
        let persona: Persona = validate(json!({
            "id": 1,
            "name": "Lapwing",
            "description": "desc",
            "avatar": "/a.jpg",
            "bio": "...",
            "details": {}
        }))
        .unwrap();
        assert_eq!(persona.id, PersonaId::new(1));
    }
}
