//! Chat session state machine.
//!
//! ```text
//!            select()               begin_send()
//!   Idle ─────────────▶ Ready ─────────────────▶ AwaitingReply
//!                         ▲                            │
//!                         └──── resolve() (last) ──────┘
//! ```
//!
//! The machine is synchronous and owns no I/O. The controller in the
//! application layer drives it: it calls [`ChatSession::begin_send`] before
//! the reply request goes out and [`ChatSession::resolve`] when the reply (or
//! its fallback) comes back.
//!
//! Sends are not serialized. While replies are pending further sends are
//! accepted, and replies are appended in the order they resolve. Each
//! selection starts a new epoch; tickets from an older epoch are stale and
//! their replies are dropped.

use crate::chat::entities::ChatMessage;
use crate::chat::text::MessageText;
use crate::persona::entities::{PersonaDetail, PersonaId};

/// Observable state of a [`ChatSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No persona selected.
    Idle,
    /// Persona selected, history loaded, nothing in flight.
    Ready,
    /// At least one reply is outstanding.
    AwaitingReply,
}

/// Why a send was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    NoPersona,
    EmptyMessage,
}

/// Handle for an accepted send, redeemed by [`ChatSession::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    epoch: u64,
    persona_id: PersonaId,
}

impl SendTicket {
    pub fn persona_id(&self) -> PersonaId {
        self.persona_id
    }
}

/// In-memory conversation with the selected persona (Entity)
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    persona: Option<PersonaDetail>,
    messages: Vec<ChatMessage>,
    pending: usize,
    epoch: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.persona, self.pending) {
            (None, _) => SessionState::Idle,
            (Some(_), 0) => SessionState::Ready,
            (Some(_), _) => SessionState::AwaitingReply,
        }
    }

    pub fn persona(&self) -> Option<&PersonaDetail> {
        self.persona.as_ref()
    }

    pub fn persona_id(&self) -> Option<PersonaId> {
        self.persona.as_ref().map(PersonaDetail::id)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    /// Switch to `persona` with its stored `history`.
    ///
    /// Any replies still in flight for the previous selection become stale.
    pub fn select(&mut self, persona: PersonaDetail, history: Vec<ChatMessage>) {
        self.epoch += 1;
        self.pending = 0;
        self.persona = Some(persona);
        self.messages = history;
    }

    /// Drop the selection and return to `Idle`.
    pub fn deselect(&mut self) {
        self.epoch += 1;
        self.pending = 0;
        self.persona = None;
        self.messages.clear();
    }

    /// Replace the in-memory history of the current selection.
    pub fn reset_history(&mut self, history: Vec<ChatMessage>) {
        self.messages = history;
    }

    /// Accept a user message: append it and mark one reply as pending.
    ///
    /// Returns the ticket to redeem later and the appended message so the
    /// caller can persist it.
    pub fn begin_send(&mut self, text: &str) -> Result<(SendTicket, ChatMessage), SendRejection> {
        let persona_id = self.persona_id().ok_or(SendRejection::NoPersona)?;
        let text = MessageText::try_new(text).ok_or(SendRejection::EmptyMessage)?;

        let message = ChatMessage::user(text.into_content());
        self.messages.push(message.clone());
        self.pending += 1;

        Ok((
            SendTicket {
                epoch: self.epoch,
                persona_id,
            },
            message,
        ))
    }

    /// Whether `ticket` still belongs to the current selection.
    pub fn is_current(&self, ticket: &SendTicket) -> bool {
        ticket.epoch == self.epoch && self.persona.is_some()
    }

    /// Append the reply for `ticket`.
    ///
    /// Returns `None` and leaves the session untouched when the ticket is
    /// stale.
    pub fn resolve(&mut self, ticket: &SendTicket, reply: ChatMessage) -> Option<&ChatMessage> {
        if !self.is_current(ticket) {
            return None;
        }
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(reply);
        self.messages.last()
    }
}
