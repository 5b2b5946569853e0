//! Mock reply service
//!
//! Stands in for a language model: picks a canned line for the persona after
//! a random delay.

mod canned;
mod mock;

pub use canned::{CannedReplies, UNKNOWN_PERSONA_REPLY};
pub use mock::{MockReplyService, ReplyDelay};
