//! Chat session use case.
//!
//! [`ChatSessionController`] drives the [`ChatSession`] state machine for one
//! client: it loads the selected persona and its history, applies user
//! messages optimistically, asks the [`ReplyService`] for an answer and writes
//! every change through to the [`LocalChatStore`].
//!
//! Each mutation happens in two steps: apply to memory, then persist. A
//! storage failure therefore never undoes an in-memory transition.
//!
//! The session lock is held only for synchronous work. Sends may overlap;
//! replies are appended in the order they arrive, and a reply that arrives
//! after the user switched persona is dropped.

use crate::config::ChatBehavior;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::persona_directory::{DirectoryError, PersonaDirectory};
use crate::ports::reply_service::ReplyService;
use crate::store::LocalChatStore;
use persona_domain::util::preview;
use persona_domain::{
    ChatMessage, ChatSession, Persona, PersonaDetail, PersonaId, SendRejection, SessionState,
};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by persona selection
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Persona not found: {0}")]
    PersonaNotFound(PersonaId),

    #[error("Could not load persona: {0}")]
    Directory(DirectoryError),
}

impl From<DirectoryError> for SessionError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::NotFound(id) => SessionError::PersonaNotFound(id),
            other => SessionError::Directory(other),
        }
    }
}

/// Result of [`ChatSessionController::send_message`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent.
    Rejected(SendRejection),
    /// The service answered; the reply was appended.
    Replied(ChatMessage),
    /// The service failed; the fallback message was appended.
    Fallback(ChatMessage),
    /// The selection changed before the reply arrived; nothing was appended.
    Abandoned,
}

/// Point-in-time copy of the session for rendering
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub persona: Option<PersonaDetail>,
    pub messages: Vec<ChatMessage>,
    pub pending_replies: usize,
}

pub struct ChatSessionController {
    directory: Arc<dyn PersonaDirectory>,
    replies: Arc<dyn ReplyService>,
    store: LocalChatStore,
    behavior: ChatBehavior,
    conversation_logger: Arc<dyn ConversationLogger>,
    session: Mutex<ChatSession>,
}

impl ChatSessionController {
    pub fn new(
        directory: Arc<dyn PersonaDirectory>,
        replies: Arc<dyn ReplyService>,
        store: LocalChatStore,
    ) -> Self {
        Self {
            directory,
            replies,
            store,
            behavior: ChatBehavior::default(),
            conversation_logger: Arc::new(NoConversationLogger),
            session: Mutex::new(ChatSession::new()),
        }
    }

    pub fn with_behavior(mut self, behavior: ChatBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    // ==================== Queries ====================

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.session().messages().to_vec()
    }

    pub fn persona(&self) -> Option<PersonaDetail> {
        self.session().persona().cloned()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.session();
        SessionSnapshot {
            state: session.state(),
            persona: session.persona().cloned(),
            messages: session.messages().to_vec(),
            pending_replies: session.pending_replies(),
        }
    }

    /// Personas available for selection.
    pub async fn list_personas(&self) -> Result<Vec<Persona>, DirectoryError> {
        self.directory.list().await
    }

    // ==================== Transitions ====================

    /// Select a persona and load its stored history.
    ///
    /// The previous selection is dropped first, so replies still in flight for
    /// it are abandoned. On failure the session stays `Idle`.
    pub async fn select_persona(&self, id: PersonaId) -> Result<PersonaDetail, SessionError> {
        self.session().deselect();

        let detail = match self.directory.get(id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Could not select persona {}: {}", id, e);
                return Err(e.into());
            }
        };

        let history = self.store.read(id);
        let count = history.len();
        self.session().select(detail.clone(), history);

        info!("Selected persona {} ({}), {} stored messages", id, detail.name(), count);
        self.conversation_logger
            .log(ConversationEvent::persona_selected(&detail, count));

        Ok(detail)
    }

    /// Send a user message and wait for its reply.
    ///
    /// The user message is visible (and persisted) before the reply request
    /// starts. Blank text or a missing selection is a no-op.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let (ticket, user_message) = {
            let mut session = self.session();
            let (ticket, message) = match session.begin_send(text) {
                Ok(accepted) => accepted,
                Err(rejection) => {
                    debug!("Send rejected: {:?}", rejection);
                    return SendOutcome::Rejected(rejection);
                }
            };
            self.store.append(ticket.persona_id(), message.clone());
            (ticket, message)
        };

        let persona = ticket.persona_id();
        debug!("Sending to persona {}: {}", persona, preview(text, 80));
        self.conversation_logger
            .log(ConversationEvent::message_sent(persona, &user_message.content));

        let (reply, fell_back) = match self.replies.reply(persona, text).await {
            Ok(reply) => {
                self.conversation_logger
                    .log(ConversationEvent::reply_received(persona, &reply.content));
                (reply, false)
            }
            Err(e) => {
                warn!("Reply for persona {} failed: {}", persona, e);
                let fallback = &self.behavior.fallback_reply;
                self.conversation_logger.log(ConversationEvent::reply_failed(
                    persona,
                    &e.to_string(),
                    fallback,
                ));
                (ChatMessage::assistant(fallback.clone()), true)
            }
        };

        {
            let mut session = self.session();
            if session.resolve(&ticket, reply.clone()).is_none() {
                debug!("Persona {} no longer selected; dropping reply", persona);
                self.conversation_logger
                    .log(ConversationEvent::reply_abandoned(persona));
                return SendOutcome::Abandoned;
            }
            self.store.append(persona, reply.clone());
        }

        if fell_back {
            SendOutcome::Fallback(reply)
        } else {
            SendOutcome::Replied(reply)
        }
    }

    /// Erase the selected persona's history, in memory and in storage.
    ///
    /// Returns false when no persona is selected.
    pub fn clear_history(&self) -> bool {
        let mut session = self.session();
        let Some(persona) = session.persona_id() else {
            return false;
        };
        session.reset_history(Vec::new());
        self.store.clear(persona);
        info!("Cleared history for persona {}", persona);
        true
    }

    fn session(&self) -> MutexGuard<'_, ChatSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
