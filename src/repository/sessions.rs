//! Session store with expiry

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Session;

#[derive(Clone, Default)]
pub struct SessionsRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session, dropping any that have already expired
    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(session.id.clone(), session);
    }

    /// Get a live session. Expired sessions are treated as absent.
    pub async fn get(&self, id: &str, now: DateTime<Utc>) -> Option<Session> {
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|s| !s.is_expired(now))
            .cloned()
    }

    /// Revoke a session. Returns whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
