//! Chat domain.
//!
//! - [`entities::ChatMessage`]: a single message in a persona conversation
//! - [`message_map::MessageMap`]: persisted per-persona histories
//! - [`text::MessageText`]: validated, non-blank user input
//! - [`request::ChatRequest`]: body of a reply request

pub mod entities;
pub mod message_map;
pub mod request;
pub mod text;

/// Assistant message substituted when the reply request fails.
pub const TRANSPORT_FALLBACK_REPLY: &str = "抱歉，出错了。";

/// Fallback wording used by the persona picker page.
pub const PICKER_FALLBACK_REPLY: &str = "抱歉，我好像出了一点问题...";
