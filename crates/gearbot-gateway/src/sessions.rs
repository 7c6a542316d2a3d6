//! In-memory chat session registry.
//!
//! Transcripts are caller-owned presentation state: append-only (role, text)
//! pairs that live for the process lifetime only. The engine never sees them.

use std::collections::HashMap;
use std::sync::Mutex;

use gearbot_core::types::ChatMessage;

/// Session transcripts keyed by opaque session id.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to a session, creating it (seeded with the greeting) on first
    /// use.
    pub fn append(&self, session_id: &str, greeting: &str, message: ChatMessage) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| vec![ChatMessage::assistant(greeting)])
            .push(message);
    }

    /// Full transcript for a session, if it exists.
    pub fn history(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
