//! Dashboard chat summaries.

use crate::core::validation::Validated;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the dashboard's "recent conversations" list (read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub persona_name: String,
    pub title: String,
    pub last_updated: DateTime<Utc>,
}

impl Validated for ChatSummary {
    const SUBJECT: &'static str = "chat summary";

    fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_list;
    use serde_json::json;

    #[test]
    fn test_parses_rfc3339_timestamps() {
        let rows: Vec<ChatSummary> = validate_list(json!([{
            "id": "chat_abc_123",
            "persona_name": "资深程序员",
            "title": "关于React Hooks的深度讨论",
            "last_updated": "2023-10-27T10:00:00Z"
        }]))
        .unwrap();
        assert_eq!(rows[0].last_updated.to_rfc3339(), "2023-10-27T10:00:00+00:00");
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let err = validate_list::<ChatSummary>(json!([{
            "id": "x",
            "persona_name": "n",
            "title": "t",
            "last_updated": "yesterday"
        }]))
        .unwrap_err();
        assert!(err.reason().starts_with("element 0:"));
    }

    #[test]
    fn test_rejects_blank_id() {
        let err = validate_list::<ChatSummary>(json!([{
            "id": " ",
            "persona_name": "n",
            "title": "t",
            "last_updated": "2023-10-27T10:00:00Z"
        }]))
        .unwrap_err();
        assert!(err.reason().contains("id must not be empty"));
    }
}
