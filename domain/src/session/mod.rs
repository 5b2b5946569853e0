//! Chat session domain.
//!
//! - [`state::ChatSession`]: pure state machine behind the chat controller
//! - [`state::SessionState`]: `Idle` / `Ready` / `AwaitingReply`
//! - [`state::SendTicket`]: proof that a send was accepted, redeemed when the reply lands

pub mod state;
