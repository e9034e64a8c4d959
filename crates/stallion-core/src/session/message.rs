//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation,
//! including roles, grounding citations, and message content.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// Where a grounding citation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    /// Web search grounding.
    Search,
    /// Maps grounding.
    Maps,
}

/// A source link supplied by the generative backend supporting part of
/// its answer.
///
/// Citations are opaque pass-through data: the engine preserves backend
/// order and does not validate or deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Display label for the source.
    pub title: String,
    /// Absolute link to the source.
    pub uri: String,
    /// Grounding kind, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CitationKind>,
}

impl Citation {
    /// Creates a search citation.
    pub fn search(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
            kind: Some(CitationKind::Search),
        }
    }
}

/// A single message in a conversation log.
///
/// Messages are immutable once created: the engine never edits or removes
/// an appended message. Citations are present only on assistant messages
/// whose reply carried at least one grounding source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format).
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
    /// Grounding citations, in the order the backend reported them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
}

impl ChatMessage {
    /// Creates a user message with the literal submitted text.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content, Vec::new())
    }

    /// Creates an assistant message with optional grounding citations.
    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self::new(MessageRole::Assistant, content, citations)
    }

    fn new(role: MessageRole, content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_have_unique_ids() {
        let a = ChatMessage::user("first");
        let b = ChatMessage::user("second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_message_has_no_citations() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, MessageRole::User);
        assert!(msg.citations.is_empty());
    }

    #[test]
    fn test_assistant_message_preserves_citation_order() {
        let msg = ChatMessage::assistant(
            "answer",
            vec![
                Citation::search("Registrar", "https://example.edu/registrar"),
                Citation::search("Library", "https://example.edu/library"),
            ],
        );
        assert_eq!(msg.citations[0].title, "Registrar");
        assert_eq!(msg.citations[1].title, "Library");
    }
}
