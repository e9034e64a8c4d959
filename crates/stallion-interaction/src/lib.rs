//! Generative backend adapters for the Stallion application.
//!
//! Implements the `GenerativeBackend` capability declared in
//! `stallion-core` against the Gemini REST API, including the system
//! instruction builder and grounding-citation extraction.

pub mod gemini;
pub mod prompt;

pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiBackend, NO_RESPONSE_TEXT};
