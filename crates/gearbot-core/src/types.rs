//! Shared data types: catalog records and chat transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product in the catalog, available for matching.
///
/// `id` and `name` are guaranteed non-blank by the loader; rows failing that
/// invariant never reach a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Opaque identifier, unique per record, compared as text.
    pub id: String,
    pub name: String,
    pub url: String,
    /// Free-text tag list; empty when the source column was blank.
    pub keywords: String,
}

/// One training video, tagged with a product identifier.
///
/// `product_id` may embed the product id inside a larger composite key
/// ("P1,P2"); the responder joins by substring containment, not equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    pub product_id: String,
    pub title: String,
    pub url: String,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in a caller-owned session transcript.
///
/// Transcripts are presentation state: the gateway session registry and the
/// CLI REPL own them, the engine never reads or writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into(), timestamp: Utc::now() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into(), timestamp: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_roles() {
        let m = ChatMessage::user("hello");
        assert_eq!(m.role, ChatRole::User);
        assert_eq!(m.content, "hello");
        let m = ChatMessage::assistant("hi there");
        assert_eq!(m.role, ChatRole::Assistant);
    }

    #[test]
    fn test_chat_role_serializes_lowercase() {
        let m = ChatMessage::user("q");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["role"], "user");
    }
}
