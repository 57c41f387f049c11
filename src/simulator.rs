//! Local stand-in for the assistant backend.
//!
//! A send appends the user's message right away and hands back a
//! [`PendingReply`]. Awaiting it sleeps the configured delay and yields the
//! canned assistant message, which is then applied to the thread the send
//! started from, even if another thread has been selected in between.

use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::types::{ChatMessage, ThreadId};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_REPLY_TEXT: &str = "I'm BenAI, a sophisticated AI assistant. I'm here to help answer your questions, provide information, and assist with various tasks. How can I help you today?";

#[derive(Clone, Debug, PartialEq)]
pub struct ReplySimulator {
    delay: Duration,
    reply_text: String,
}

impl Default for ReplySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY, DEFAULT_REPLY_TEXT)
    }
}

impl ReplySimulator {
    pub fn new(delay: Duration, reply_text: impl Into<String>) -> Self {
        Self {
            delay,
            reply_text: reply_text.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.reply_delay, config.reply_text.clone())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Appends the trimmed input to the active thread as a user message.
    ///
    /// Returns `None` without touching the store when the input is blank, no
    /// thread is active, or an earlier reply has not landed yet.
    pub fn begin_send(&self, store: &mut SessionStore, input: &str) -> Option<PendingReply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if store.is_awaiting_reply() {
            debug!("send ignored, reply still pending");
            return None;
        }
        let thread_id = store.active_id()?.clone();
        if !store.append_message(&thread_id, ChatMessage::user(trimmed)) {
            return None;
        }
        store.mark_awaiting_reply(&thread_id);
        info!(thread = %thread_id, chars = trimmed.chars().count(), "message sent");
        Some(PendingReply {
            thread_id,
            delay: self.delay,
            reply_text: self.reply_text.clone(),
        })
    }
}

/// A reply scheduled by [`ReplySimulator::begin_send`].
#[derive(Debug)]
#[must_use = "a pending reply does nothing until awaited"]
pub struct PendingReply {
    thread_id: ThreadId,
    delay: Duration,
    reply_text: String,
}

impl PendingReply {
    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    pub async fn wait(self) -> CompletedReply {
        tokio::time::sleep(self.delay).await;
        debug!(thread = %self.thread_id, delay_ms = self.delay.as_millis(), "reply ready");
        CompletedReply {
            thread_id: self.thread_id,
            message: ChatMessage::assistant(self.reply_text),
        }
    }
}

#[derive(Debug)]
pub struct CompletedReply {
    pub thread_id: ThreadId,
    pub message: ChatMessage,
}

impl CompletedReply {
    /// Appends the reply to its originating thread and clears the loading flag.
    pub fn apply(self, store: &mut SessionStore) -> bool {
        let applied = store.append_message(&self.thread_id, self.message);
        store.clear_awaiting_reply();
        if applied {
            info!(thread = %self.thread_id, "reply appended");
        }
        applied
    }
}
