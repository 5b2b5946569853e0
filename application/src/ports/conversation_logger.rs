//! Chat transcript port.
//!
//! `tracing` carries operational diagnostics. This port records what was
//! said: persona switches, user messages, replies and their failures, one
//! structured event at a time.

use persona_domain::{PersonaDetail, PersonaId};
use serde_json::{Value, json};

/// One transcript entry: an event name plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn persona_selected(detail: &PersonaDetail, history_len: usize) -> Self {
        Self::new(
            "persona_selected",
            json!({
                "persona_id": detail.id().value(),
                "persona_name": detail.name(),
                "history_len": history_len,
            }),
        )
    }

    pub fn message_sent(persona: PersonaId, text: &str) -> Self {
        Self::new(
            "message_sent",
            json!({ "persona_id": persona.value(), "text": text }),
        )
    }

    pub fn reply_received(persona: PersonaId, text: &str) -> Self {
        Self::new(
            "reply_received",
            json!({ "persona_id": persona.value(), "text": text }),
        )
    }

    /// The reply service failed; `fallback` is what the user saw instead.
    pub fn reply_failed(persona: PersonaId, error: &str, fallback: &str) -> Self {
        Self::new(
            "reply_failed",
            json!({
                "persona_id": persona.value(),
                "error": error,
                "fallback": fallback,
            }),
        )
    }

    /// A reply arrived after the user switched away from `persona`.
    pub fn reply_abandoned(persona: PersonaId) -> Self {
        Self::new("reply_abandoned", json!({ "persona_id": persona.value() }))
    }
}

/// Sink for transcript events.
///
/// Logging never fails from the caller's point of view; adapters swallow
/// their own write errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_domain::{DetailMap, Persona};

    #[test]
    fn test_persona_selected_payload() {
        let detail = PersonaDetail::new(
            Persona::new(2, "Nia", "d", "/nia.jpg"),
            "bio",
            DetailMap::default(),
        );
        let event = ConversationEvent::persona_selected(&detail, 4);
        assert_eq!(event.event_type, "persona_selected");
        assert_eq!(
            event.payload,
            json!({ "persona_id": 2, "persona_name": "Nia", "history_len": 4 })
        );
    }

    #[test]
    fn test_reply_failed_carries_fallback() {
        let event = ConversationEvent::reply_failed(PersonaId::new(1), "HTTP 500", "抱歉，出错了。");
        assert_eq!(event.payload["error"], "HTTP 500");
        assert_eq!(event.payload["fallback"], "抱歉，出错了。");
    }
}
