//! Generative backend capability interface.
//!
//! The session engine depends on, but does not implement, a fallible
//! text-generation operation. Injecting the capability keeps the engine a
//! pure function of its inputs plus its own owned state, and enables
//! deterministic testing with scripted implementations.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::message::{Citation, MessageRole};
use super::mode::ChatMode;

/// One prior turn entry sent back to the backend.
///
/// Only role and content travel to the backend; citations are never sent
/// back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

/// Conversation context forwarded to the backend on every request.
///
/// The engine treats these as opaque strings; it never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    /// Label of the user's academic unit.
    pub college: String,
    /// Active conversational mode.
    pub mode: ChatMode,
    /// Verified student identifier, when Tutoring is unlocked.
    pub student_id: Option<String>,
}

/// A generated reply: free text plus zero or more grounding citations,
/// in the order the backend reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReply {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl GeneratedReply {
    /// Creates a reply with no citations.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }
}

/// Backend error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Network issues, timeouts - retryable
    Network,
    /// Rate limited (429) - retryable with backoff
    RateLimit,
    /// Server error (5xx) - retryable
    Server,
    /// Authentication failed (401, 403) - not retryable
    Auth,
    /// Bad request (400) - not retryable
    InvalidRequest,
    /// Response body could not be understood
    Malformed,
    /// Unknown error
    Unknown,
}

impl BackendErrorKind {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network | Self::RateLimit | Self::Server)
    }
}

/// Error raised by a [`GenerativeBackend`] implementation.
///
/// Adapters must convert every transport, quota, or response error into
/// this type; nothing may panic or escape across the capability boundary.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
    pub retry_after: Option<Duration>,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retry_after: None,
        }
    }

    pub fn with_retry_after(mut self, duration: Duration) -> Self {
        self.retry_after = Some(duration);
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::RateLimit, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Server, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Auth, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidRequest, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Malformed, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Unknown, message)
    }
}

/// Capability interface for the external generative-language backend.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generates a reply to `prompt` given the preceding conversation
    /// history and the current context.
    ///
    /// Citation order must be preserved as received from the backend.
    async fn generate(
        &self,
        prompt: &str,
        history: &[HistoryEntry],
        ctx: &PromptContext,
    ) -> Result<GeneratedReply, BackendError>;
}
