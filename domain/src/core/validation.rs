//! Schema validation at external boundaries.
//!
//! Payloads crossing a process boundary (HTTP bodies, persisted JSON) arrive
//! as untyped JSON. Every such payload is decoded into a typed value and then
//! checked against the type's own invariants before it is trusted:
//!
//! ```
//! use persona_domain::{validate, Persona};
//!
//! let raw = serde_json::json!({
//!     "id": 1,
//!     "name": "Lapwing",
//!     "description": "cyber ghost",
//!     "avatar": "/avatars/lapwing.jpg"
//! });
//! let persona: Persona = validate(raw).unwrap();
//! assert_eq!(persona.name, "Lapwing");
//!
//! let broken = serde_json::json!({ "id": "one" });
//! assert!(validate::<Persona>(broken).is_err());
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A payload failed schema or invariant validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {subject}: {reason}")]
pub struct ValidationError {
    subject: &'static str,
    reason: String,
}

impl ValidationError {
    pub fn new(subject: &'static str, reason: impl Into<String>) -> Self {
        Self {
            subject,
            reason: reason.into(),
        }
    }

    /// What was being validated (e.g. "persona", "chat request").
    pub fn subject(&self) -> &'static str {
        self.subject
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A type that can be validated from untyped JSON.
///
/// Decoding is delegated to serde; [`check`](Validated::check) adds the
/// invariants serde cannot express (non-empty names and the like).
pub trait Validated: DeserializeOwned {
    /// Human-readable name used in error messages.
    const SUBJECT: &'static str;

    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Decode and check a single JSON value.
pub fn validate<T: Validated>(value: Value) -> Result<T, ValidationError> {
    let parsed: T =
        serde_json::from_value(value).map_err(|e| ValidationError::new(T::SUBJECT, e.to_string()))?;
    parsed
        .check()
        .map_err(|reason| ValidationError::new(T::SUBJECT, reason))?;
    Ok(parsed)
}

/// Decode and check a raw JSON document.
pub fn validate_str<T: Validated>(raw: &str) -> Result<T, ValidationError> {
    let parsed: T =
        serde_json::from_str(raw).map_err(|e| ValidationError::new(T::SUBJECT, e.to_string()))?;
    parsed
        .check()
        .map_err(|reason| ValidationError::new(T::SUBJECT, reason))?;
    Ok(parsed)
}

/// Decode and check a JSON array, element by element.
///
/// The error names the index of the first offending element.
pub fn validate_list<T: Validated>(value: Value) -> Result<Vec<T>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::new(T::SUBJECT, "expected a JSON array"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            validate::<T>(item).map_err(|e| {
                ValidationError::new(T::SUBJECT, format!("element {}: {}", index, e.reason()))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Label {
        text: String,
    }

    impl Validated for Label {
        const SUBJECT: &'static str = "label";

        fn check(&self) -> Result<(), String> {
            if self.text.is_empty() {
                return Err("text must not be empty".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_validate_accepts_valid_value() {
        let label: Label = validate(json!({ "text": "hello" })).unwrap();
        assert_eq!(label.text, "hello");
    }

    #[test]
    fn test_validate_reports_decode_failure() {
        let err = validate::<Label>(json!({ "text": 3 })).unwrap_err();
        assert_eq!(err.subject(), "label");
        assert!(err.reason().contains("invalid type"));
    }

    #[test]
    fn test_validate_runs_invariant_check() {
        let err = validate::<Label>(json!({ "text": "" })).unwrap_err();
        assert_eq!(err.to_string(), "invalid label: text must not be empty");
    }

    #[test]
    fn test_validate_str_rejects_malformed_json() {
        assert!(validate_str::<Label>("{not json").is_err());
    }

    #[test]
    fn test_validate_list_names_offending_index() {
        let err = validate_list::<Label>(json!([{ "text": "a" }, { "text": "" }])).unwrap_err();
        assert!(err.reason().starts_with("element 1:"));
    }

    #[test]
    fn test_validate_list_requires_array() {
        let err = validate_list::<Label>(json!({ "text": "a" })).unwrap_err();
        assert_eq!(err.reason(), "expected a JSON array");
    }

    #[test]
    fn test_detail_order_survives_both_decoding_paths() {
        let raw = r#"{"id":2,"name":"Nia","description":"d","avatar":"/n.jpg","bio":"b",
            "details":{"年龄":"19岁","职业":"数字游民","爱好":"冲浪","性格":"随性"}}"#;
        let expected = ["年龄", "职业", "爱好", "性格"];

        let via_value: crate::PersonaDetail =
            validate(serde_json::from_str::<Value>(raw).unwrap()).unwrap();
        let labels: Vec<_> = via_value.details.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, expected);

        let via_str: crate::PersonaDetail = validate_str(raw).unwrap();
        let labels: Vec<_> = via_str.details.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, expected);
    }
}
