use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::entities::{MemoryStore, Session};

impl MemoryStore {
    /// Insert a new active session under a freshly generated id.
    pub fn create_session(&self) -> Session {
        let session = Session::new(Uuid::new_v4().to_string(), Utc::now());
        self.lock().upsert(session.clone());
        debug!(session_id = %session.session_id, "session created");
        session
    }

    pub fn get_session(&self, id: &str) -> Option<Session> {
        let inner = self.lock();
        inner.index.get(id).map(|&pos| inner.sessions[pos].clone())
    }

    /// All sessions, seeds first, then in creation order.
    pub fn list_sessions(&self) -> Vec<Session> {
        self.lock().sessions.clone()
    }

    pub fn total_sessions(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn active_sessions(&self) -> usize {
        self.lock().sessions.iter().filter(|s| s.is_active()).count()
    }
}
