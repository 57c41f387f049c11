//! In-memory conversation threads.
//!
//! The store keeps threads most-recent first and tracks at most one active
//! thread. Nothing here touches the renderer, the views hold a
//! `Signal<SessionStore>` and mutate it through these methods.

use crate::types::{ChatMessage, ThreadId, current_time};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use tracing::{debug, warn};

pub const DEFAULT_THREAD_TITLE: &str = "New Chat";
pub const TITLE_MAX_CHARS: usize = 30;

static THREAD_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_thread_id(now: OffsetDateTime) -> ThreadId {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let seq = THREAD_COUNTER.fetch_add(1, Ordering::Relaxed);
    ThreadId::new(millis, seq)
}

/// A single conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    id: ThreadId,
    title: String,
    /// Creation time, refreshed on every append.
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
    messages: Vec<ChatMessage>,
}

impl Thread {
    fn new(id: ThreadId, now: OffsetDateTime) -> Self {
        Self {
            id,
            title: DEFAULT_THREAD_TITLE.to_string(),
            updated_at: now,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated_at
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.title = derive_title(&self.messages);
        self.updated_at = current_time();
    }
}

/// Title shown for a thread: the leading characters of its first message.
pub fn derive_title(messages: &[ChatMessage]) -> String {
    match messages.first() {
        Some(first) if !first.content.is_empty() => {
            first.content.chars().take(TITLE_MAX_CHARS).collect()
        }
        _ => DEFAULT_THREAD_TITLE.to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    threads: Vec<Thread>,
    active: Option<ThreadId>,
    /// Thread whose simulated reply is still in flight.
    awaiting_reply: Option<ThreadId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one empty thread already selected, the state the chat
    /// screen opens with.
    pub fn with_initial_thread() -> Self {
        let mut store = Self::new();
        store.create_thread();
        store
    }

    /// Inserts an empty thread at the front and makes it active.
    pub fn create_thread(&mut self) -> ThreadId {
        let now = current_time();
        let id = next_thread_id(now);
        self.threads.insert(0, Thread::new(id.clone(), now));
        self.active = Some(id.clone());
        debug!(thread = %id, total = self.threads.len(), "created thread");
        id
    }

    /// Appends to the given thread. Unknown ids are ignored and report `false`.
    pub fn append_message(&mut self, thread_id: &ThreadId, message: ChatMessage) -> bool {
        let Some(thread) = self.thread_mut(thread_id) else {
            debug!(thread = %thread_id, "append to unknown thread ignored");
            return false;
        };
        thread.push(message);
        true
    }

    /// Makes `thread_id` active. An id that names no thread leaves the
    /// current selection untouched and reports `false`.
    pub fn select_thread(&mut self, thread_id: &ThreadId) -> bool {
        if self.thread(thread_id).is_none() {
            warn!(thread = %thread_id, "select of unknown thread rejected");
            return false;
        }
        self.active = Some(thread_id.clone());
        debug!(thread = %thread_id, "selected thread");
        true
    }

    /// Raises the loading flag for `thread_id`. Fails while another reply is
    /// still pending.
    pub(crate) fn mark_awaiting_reply(&mut self, thread_id: &ThreadId) -> bool {
        if self.awaiting_reply.is_some() {
            return false;
        }
        self.awaiting_reply = Some(thread_id.clone());
        true
    }

    pub(crate) fn clear_awaiting_reply(&mut self) {
        self.awaiting_reply = None;
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply.is_some()
    }

    pub fn awaiting_reply_in(&self) -> Option<&ThreadId> {
        self.awaiting_reply.as_ref()
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn thread(&self, thread_id: &ThreadId) -> Option<&Thread> {
        self.threads.iter().find(|thread| &thread.id == thread_id)
    }

    fn thread_mut(&mut self, thread_id: &ThreadId) -> Option<&mut Thread> {
        self.threads.iter_mut().find(|thread| &thread.id == thread_id)
    }

    pub fn active_id(&self) -> Option<&ThreadId> {
        self.active.as_ref()
    }

    pub fn active_thread(&self) -> Option<&Thread> {
        self.active.as_ref().and_then(|id| self.thread(id))
    }

    /// Title for the chat header.
    pub fn active_title(&self) -> &str {
        self.active_thread()
            .map(Thread::title)
            .unwrap_or(DEFAULT_THREAD_TITLE)
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_thread_goes_first_and_becomes_active() {
        let mut store = SessionStore::new();
        let first = store.create_thread();
        let second = store.create_thread();

        assert_eq!(store.threads()[0].id(), &second);
        assert_eq!(store.threads()[1].id(), &first);
        assert_eq!(store.active_id(), Some(&second));
    }

    #[test]
    fn empty_store_has_no_active_thread() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert!(store.active_thread().is_none());
        assert_eq!(store.active_title(), DEFAULT_THREAD_TITLE);
    }

    #[test]
    fn title_truncates_on_char_boundaries() {
        let messages = vec![ChatMessage::user("héllo wörld ".repeat(5))];
        let title = derive_title(&messages);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
        assert!(title.starts_with("héllo wörld"));
    }

    #[test]
    fn short_first_message_is_whole_title() {
        let messages = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello there")];
        assert_eq!(derive_title(&messages), "hi");
    }

    #[test]
    fn title_follows_first_message_not_latest() {
        let mut store = SessionStore::new();
        let id = store.create_thread();
        store.append_message(&id, ChatMessage::user("first question"));
        store.append_message(&id, ChatMessage::assistant("an answer"));
        assert_eq!(store.thread(&id).map(Thread::title), Some("first question"));
    }

    #[test]
    fn select_unknown_keeps_current_selection() {
        let mut store = SessionStore::new();
        let id = store.create_thread();
        let bogus = ThreadId::new(0, 0);

        assert!(!store.select_thread(&bogus));
        assert_eq!(store.active_id(), Some(&id));
    }

    #[test]
    fn select_switches_active_thread() {
        let mut store = SessionStore::new();
        let older = store.create_thread();
        store.create_thread();

        assert!(store.select_thread(&older));
        assert_eq!(store.active_id(), Some(&older));
    }
}
