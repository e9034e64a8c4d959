//! Session domain module.
//!
//! This module contains the conversation session engine and its
//! collaborators.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ChatMessage`, `Citation`)
//! - `mode`: Conversation mode types (`ChatMode`, `ModeController`)
//! - `backend`: Generative backend capability (`GenerativeBackend`)
//! - `engine`: Turn orchestration (`ChatSession`)

mod backend;
mod engine;
mod message;
mod mode;

// Re-export public API
pub use backend::{
    BackendError, BackendErrorKind, GeneratedReply, GenerativeBackend, HistoryEntry, PromptContext,
};
pub use engine::{ChatSession, FALLBACK_REPLY, TurnOutcome};
pub use message::{ChatMessage, Citation, CitationKind, MessageRole};
pub use mode::{ChatMode, ModeController, ModeTransition};
