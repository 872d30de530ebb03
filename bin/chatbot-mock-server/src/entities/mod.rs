//! In-memory domain store.
//!
//! [`MemoryStore`] holds sessions and their message history behind a single
//! mutex, so concurrent handlers observe one writer at a time. Session
//! operations live in [`session`], message operations in [`chat`].
//! [`ScenarioCatalog`] is the read-only scenario list.
//!
//! Nothing here is persisted; a restart returns to the fixture seed.

pub mod chat;
pub mod dao;
pub mod scenario;
pub mod session;

pub use dao::{Message, MessageType, Scenario, Session, SessionStatus};
pub use scenario::ScenarioCatalog;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

/// Errors reported by [`MemoryStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),
}

#[derive(Default)]
struct Inner {
    /// Sessions in insertion order.
    sessions: Vec<Session>,
    /// session_id -> position in `sessions`.
    index: HashMap<String, usize>,
    messages: HashMap<String, Vec<Message>>,
}

impl Inner {
    fn upsert(&mut self, session: Session) {
        match self.index.get(&session.session_id) {
            Some(&pos) => self.sessions[pos] = session,
            None => {
                self.index.insert(session.session_id.clone(), self.sessions.len());
                self.sessions.push(session);
            }
        }
    }

    fn session_mut(&mut self, id: &str) -> Option<&mut Session> {
        let pos = *self.index.get(id)?;
        self.sessions.get_mut(pos)
    }
}

/// Process-wide session and message store, injected through `AppState`.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.lock().sessions.len();
        write!(f, "MemoryStore({count} sessions)")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { inner: Mutex::new(Inner::default()) }
    }

    /// Store pre-populated with fixture sessions. A repeated id replaces the
    /// earlier record in place.
    pub fn seeded(sessions: impl IntoIterator<Item = Session>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for session in sessions {
                inner.upsert(session);
            }
        }
        store
    }

    // Mutations never panic midway, so a poisoned guard still holds
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
