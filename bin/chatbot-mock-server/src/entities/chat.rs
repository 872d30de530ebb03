use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::entities::{MemoryStore, Message, MessageType, StoreError};

impl MemoryStore {
    /// Record a message and fold it into the session's counters.
    ///
    /// Fails with [`StoreError::SessionNotFound`] without touching the store
    /// when `session_id` is unknown.
    pub fn append_message(
        &self,
        session_id: &str,
        content: &str,
        message_type: MessageType,
        intent: Option<String>,
    ) -> Result<Message, StoreError> {
        let mut inner = self.lock();
        let session = inner
            .session_mut(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_owned()))?;
        session.message_count += 1;
        session.last_message = content.to_owned();

        let message = Message {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.to_owned(),
            message_type,
            content: content.to_owned(),
            intent,
            timestamp: Utc::now(),
        };
        inner
            .messages
            .entry(session_id.to_owned())
            .or_default()
            .push(message.clone());
        debug!(session_id, message_id = %message.id, "message appended");
        Ok(message)
    }

    /// Messages recorded for a session in this process, oldest first.
    pub fn list_messages(&self, session_id: &str) -> Result<Vec<Message>, StoreError> {
        let inner = self.lock();
        if !inner.index.contains_key(session_id) {
            return Err(StoreError::SessionNotFound(session_id.to_owned()));
        }
        Ok(inner.messages.get(session_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appending_n_messages_bumps_count_by_n() {
        let store = MemoryStore::new();
        let id = store.create_session().session_id;
        for text in ["one", "two", "three"] {
            store.append_message(&id, text, MessageType::User, None).unwrap();
        }
        let session = store.get_session(&id).unwrap();
        assert_eq!(session.message_count, 3);
        assert_eq!(session.last_message, "three");
    }

    #[test]
    fn history_matches_count_and_order() {
        let store = MemoryStore::new();
        let id = store.create_session().session_id;
        store
            .append_message(&id, "привет", MessageType::User, Some("greeting".into()))
            .unwrap();
        store.append_message(&id, "Здравствуйте!", MessageType::Bot, None).unwrap();

        let history = store.list_messages(&id).unwrap();
        assert_eq!(history.len() as u64, store.get_session(&id).unwrap().message_count);
        assert_eq!(history[0].content, "привет");
        assert_eq!(history[0].intent.as_deref(), Some("greeting"));
        assert_eq!(history[1].message_type, MessageType::Bot);
        assert!(history.iter().all(|m| m.session_id == id));
    }

    #[test]
    fn unknown_session_is_rejected_and_store_unchanged() {
        let store = MemoryStore::new();
        let id = store.create_session().session_id;
        let before = store.list_sessions();

        let err = store
            .append_message("no-such-session", "hi", MessageType::User, None)
            .unwrap_err();
        assert_eq!(err, StoreError::SessionNotFound("no-such-session".into()));
        assert_eq!(store.list_sessions(), before);
        assert!(store.list_messages(&id).unwrap().is_empty());
        assert!(store.list_messages("no-such-session").is_err());
    }

    #[test]
    fn scripted_greeting_then_balance_flow() {
        let store = MemoryStore::new();
        let id = store.create_session().session_id;
        store.append_message(&id, "привет", MessageType::User, None).unwrap();
        store.append_message(&id, "баланс", MessageType::User, None).unwrap();
        let session = store.get_session(&id).unwrap();
        assert_eq!(session.message_count, 2);
        assert_eq!(session.last_message, "баланс");
    }
}
