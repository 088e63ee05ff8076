//! Session Store
//!
//! In-memory map of live interview sessions keyed by id. Sessions are
//! independent; each one sits behind its own mutex so operations on a
//! session run one at a time while other sessions proceed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::models::session::InterviewSession;
use crate::utils::error::{AppError, AppResult};

/// Shared handle to one session
pub type SessionHandle = Arc<Mutex<InterviewSession>>;

/// Registry of live sessions
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session and return its id
    pub async fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id.clone(),
            Arc::new(Mutex::new(InterviewSession::new(id.clone()))),
        );
        debug!(session_id = %id, live = sessions.len(), "session created");
        id
    }

    /// Look up a session handle
    pub async fn get(&self, id: &str) -> AppResult<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("session {}", id)))
    }

    /// Drop a session. Returns whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!(session_id = %id, "session removed");
        }
        removed
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Run a synchronous closure against a locked session
    pub async fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut InterviewSession) -> R,
    ) -> AppResult<R> {
        let handle = self.get(id).await?;
        let mut session = handle.lock().await;
        Ok(f(&mut session))
    }
}
