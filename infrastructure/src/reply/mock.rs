use super::canned::CannedReplies;
use async_trait::async_trait;
use persona_application::ports::reply_service::{ReplyError, ReplyService};
use persona_domain::util::preview;
use persona_domain::{ChatMessage, PersonaId};
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Uniform delay range `[min, max]` applied before each reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(1000),
            max: Duration::from_millis(2000),
        }
    }
}

impl ReplyDelay {
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    /// Draw a delay. An inverted range collapses to `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// Canned-reply implementation of [`ReplyService`]. Never fails.
#[derive(Debug, Clone)]
pub struct MockReplyService {
    replies: CannedReplies,
    delay: ReplyDelay,
}

impl Default for MockReplyService {
    fn default() -> Self {
        Self::new(CannedReplies::builtin())
    }
}

impl MockReplyService {
    pub fn new(replies: CannedReplies) -> Self {
        Self {
            replies,
            delay: ReplyDelay::default(),
        }
    }

    pub fn with_delay(mut self, delay: ReplyDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn replies(&self) -> &CannedReplies {
        &self.replies
    }
}

#[async_trait]
impl ReplyService for MockReplyService {
    async fn reply(&self, persona: PersonaId, text: &str) -> Result<ChatMessage, ReplyError> {
        info!(
            "Received message \"{}\" for persona {}",
            preview(text, 60),
            persona
        );

        // ThreadRng is !Send; draw everything before the first await.
        let (delay, content) = {
            let mut rng = rand::thread_rng();
            (self.delay.sample(&mut rng), self.replies.pick(persona, &mut rng))
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(ChatMessage::assistant(content))
    }
}
