//! In-memory conversation history per session.
//!
//! Process memory only: nothing survives a restart and entries are never
//! evicted. The lock guards single map operations; a read, generate, write
//! sequence for one session is not atomic, so two concurrent requests on the
//! same id race and the last `put` wins.

use std::collections::HashMap;

use haven_infer::Turn;
use parking_lot::RwLock;
use tracing::info;

/// Maps session ids to their prior turns.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Vec<Turn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// History for a session, if it has any.
    pub fn get(&self, session_id: &str) -> Option<Vec<Turn>> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Replace a session's history.
    pub fn put(&self, session_id: &str, history: Vec<Turn>) {
        self.sessions.write().insert(session_id.to_string(), history);
    }

    /// Drop a session's history. Returns true if there was one.
    pub fn reset(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().remove(session_id).is_some();
        if removed {
            info!("Reset chat session: {}", session_id);
        } else {
            info!("No session to reset: {}", session_id);
        }
        removed
    }

    /// Number of sessions holding history.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
