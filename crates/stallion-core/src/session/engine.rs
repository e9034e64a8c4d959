//! Conversation session engine.
//!
//! Owns the ordered message log, turn sequencing, the single-flight
//! pending guard, and citation attachment. One engine instance serves one
//! conversation view; it is created when the view opens and discarded
//! when it closes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::backend::{GenerativeBackend, HistoryEntry, PromptContext};
use super::message::ChatMessage;

/// Fixed reply appended when the backend fails; the failure itself is
/// logged and swallowed.
pub const FALLBACK_REPLY: &str = "The university server is experiencing high traffic. \
Please try again later or consult the official MMSU student portal.";

/// Outcome of a turn submission.
///
/// Callers observe the updated log and pending flag; the outcome only
/// reports whether a turn ran at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn settled: a user/assistant pair was appended.
    Completed,
    /// The input was empty after trimming; nothing changed.
    Ignored,
    /// A request is already in flight; no new request was issued.
    Busy,
}

/// Turn-by-turn conversation orchestrator.
///
/// The engine exclusively owns its log and pending flag. The log is
/// append-only: messages are never edited or removed, the user message of
/// turn *n* always precedes its assistant reply, and turn *n*'s pair
/// always precedes turn *n + 1*'s.
pub struct ChatSession {
    log: RwLock<Vec<ChatMessage>>,
    pending: AtomicBool,
    backend: Arc<dyn GenerativeBackend>,
}

impl ChatSession {
    /// Creates a session seeded with the welcome message for `college`.
    pub fn new(backend: Arc<dyn GenerativeBackend>, college: &str) -> Self {
        Self {
            log: RwLock::new(vec![welcome_message(college)]),
            pending: AtomicBool::new(false),
            backend,
        }
    }

    /// Submits one user turn.
    ///
    /// Empty input (after trimming) is a no-op. While a request is in
    /// flight every further submission is rejected without touching the
    /// log; the UI-level input disable is advisory only, this guard is
    /// authoritative.
    ///
    /// On backend failure the engine appends [`FALLBACK_REPLY`] as the
    /// assistant message and swallows the error; submission itself never
    /// fails.
    pub async fn submit(&self, text: &str, ctx: &PromptContext) -> TurnOutcome {
        if text.trim().is_empty() {
            return TurnOutcome::Ignored;
        }

        // Single-flight guard: at most one in-flight request per session.
        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("turn rejected: a backend request is already in flight");
            return TurnOutcome::Busy;
        }

        // Snapshot the preceding log as role/content pairs (citations are
        // never sent back), then append the user message with the literal
        // submitted text.
        let history: Vec<HistoryEntry> = {
            let mut log = self.log.write().await;
            let history = log
                .iter()
                .map(|message| HistoryEntry {
                    role: message.role,
                    content: message.content.clone(),
                })
                .collect();
            log.push(ChatMessage::user(text));
            history
        };

        debug!(mode = %ctx.mode, history_len = history.len(), "dispatching turn to backend");

        let reply = self.backend.generate(text, &history, ctx).await;

        let assistant = match reply {
            Ok(reply) => ChatMessage::assistant(reply.text, reply.citations),
            Err(err) => {
                warn!(error = %err, "generative backend failed, appending fallback reply");
                ChatMessage::assistant(FALLBACK_REPLY, Vec::new())
            }
        };

        self.log.write().await.push(assistant);
        self.pending.store(false, Ordering::SeqCst);

        TurnOutcome::Completed
    }

    /// Replaces the log with a fresh welcome message for `college`.
    ///
    /// Used when the conversational context changes (e.g. the active
    /// college changes). The log is never empty. The pending flag is not
    /// touched: callers only reset while idle.
    pub async fn reset(&self, college: &str) {
        let mut log = self.log.write().await;
        log.clear();
        log.push(welcome_message(college));
    }

    /// Returns a read-only snapshot of the conversation log.
    pub async fn log(&self) -> Vec<ChatMessage> {
        self.log.read().await.clone()
    }

    /// Returns `true` while a backend request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }
}

fn welcome_message(college: &str) -> ChatMessage {
    ChatMessage::assistant(
        format!(
            "Welcome, Stallion! \u{1F40E} I am your specialized academic assistant for the \
**{college}**. \n\nHow can I help you with your studies, enrollment, or campus navigation today?"
        ),
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::session::backend::{BackendError, GeneratedReply};
    use crate::session::message::{Citation, MessageRole};
    use crate::session::mode::ChatMode;

    /// Backend that replays scripted results and records what it was
    /// called with.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<GeneratedReply, BackendError>>>,
        calls: AtomicUsize,
        last_history: Mutex<Vec<HistoryEntry>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<GeneratedReply, BackendError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
                last_history: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeBackend for ScriptedBackend {
        async fn generate(
            &self,
            _prompt: &str,
            history: &[HistoryEntry],
            _ctx: &PromptContext,
        ) -> Result<GeneratedReply, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_history.lock().unwrap() = history.to_vec();
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(GeneratedReply::text("ok")))
        }
    }

    /// Backend that blocks until released, for exercising the in-flight
    /// guard.
    struct GatedBackend {
        release: Notify,
        entered: Notify,
    }

    impl GatedBackend {
        fn new() -> Self {
            Self {
                release: Notify::new(),
                entered: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl GenerativeBackend for GatedBackend {
        async fn generate(
            &self,
            _prompt: &str,
            _history: &[HistoryEntry],
            _ctx: &PromptContext,
        ) -> Result<GeneratedReply, BackendError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(GeneratedReply::text("late reply"))
        }
    }

    fn ctx() -> PromptContext {
        PromptContext {
            college: "College of Computing and Information Sciences".to_string(),
            mode: ChatMode::General,
            student_id: None,
        }
    }

    #[tokio::test]
    async fn test_session_is_seeded_with_welcome_message() {
        let backend = Arc::new(ScriptedBackend::new(Vec::new()));
        let session = ChatSession::new(backend, "College of Engineering");

        let log = session.log().await;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].role, MessageRole::Assistant);
        assert!(log[0].content.contains("College of Engineering"));
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let backend = Arc::new(ScriptedBackend::new(Vec::new()));
        let session = ChatSession::new(backend.clone(), "Graduate School");

        assert_eq!(session.submit("", &ctx()).await, TurnOutcome::Ignored);
        assert_eq!(session.submit("   \t\n", &ctx()).await, TurnOutcome::Ignored);

        assert_eq!(session.log().await.len(), 1);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_turn_appends_user_then_grounded_assistant() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(GeneratedReply {
            text: "Enrollment opens Jan 12.".to_string(),
            citations: vec![Citation::search("Registrar", "https://example.edu/registrar")],
        })]));
        let session = ChatSession::new(backend.clone(), "College of Law");

        let outcome = session.submit("What are enrollment dates?", &ctx()).await;

        assert_eq!(outcome, TurnOutcome::Completed);
        assert!(!session.is_pending());

        let log = session.log().await;
        assert_eq!(log.len(), 3);
        assert_eq!(log[1].role, MessageRole::User);
        assert_eq!(log[1].content, "What are enrollment dates?");
        assert_eq!(log[2].role, MessageRole::Assistant);
        assert_eq!(log[2].content, "Enrollment opens Jan 12.");
        assert_eq!(log[2].citations.len(), 1);
        assert_eq!(log[2].citations[0].title, "Registrar");
        assert_eq!(log[2].citations[0].uri, "https://example.edu/registrar");
    }

    #[tokio::test]
    async fn test_backend_failure_appends_fallback() {
        let backend = Arc::new(ScriptedBackend::new(vec![Err(BackendError::server(
            "boom",
        ))]));
        let session = ChatSession::new(backend.clone(), "College of Medicine");

        let outcome = session.submit("hello?", &ctx()).await;

        assert_eq!(outcome, TurnOutcome::Completed);
        assert!(!session.is_pending());

        let log = session.log().await;
        assert_eq!(log.len(), 3);
        assert_eq!(log[2].role, MessageRole::Assistant);
        assert_eq!(log[2].content, FALLBACK_REPLY);
        assert!(log[2].citations.is_empty());
    }

    #[tokio::test]
    async fn test_history_excludes_current_prompt_and_citations() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok(GeneratedReply {
                text: "first answer".to_string(),
                citations: vec![Citation::search("Source", "https://example.edu/a")],
            }),
            Ok(GeneratedReply::text("second answer")),
        ]));
        let session = ChatSession::new(backend.clone(), "College of Arts and Sciences");

        session.submit("first question", &ctx()).await;
        session.submit("second question", &ctx()).await;

        // History for the second turn: welcome, user, assistant - the
        // second question itself travels as the prompt, not as history.
        let history = backend.last_history.lock().unwrap().clone();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].content, "first question");
        assert_eq!(history[2].content, "first answer");
    }

    #[tokio::test]
    async fn test_log_is_append_only_across_turns() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok(GeneratedReply::text("a")),
            Err(BackendError::network("down")),
            Ok(GeneratedReply::text("c")),
        ]));
        let session = ChatSession::new(backend, "Graduate School");

        let mut seen: Vec<ChatMessage> = session.log().await;
        for prompt in ["one", "two", "three"] {
            session.submit(prompt, &ctx()).await;
            let log = session.log().await;
            // Previously observed messages are still there, unchanged.
            assert!(log.len() > seen.len());
            assert_eq!(&log[..seen.len()], &seen[..]);
            // User/assistant pairing holds after each settled turn.
            assert_eq!(log[log.len() - 2].role, MessageRole::User);
            assert_eq!(log[log.len() - 1].role, MessageRole::Assistant);
            seen = log;
        }
    }

    #[tokio::test]
    async fn test_concurrent_submit_is_rejected_without_backend_call() {
        let backend = Arc::new(GatedBackend::new());
        let session = Arc::new(ChatSession::new(backend.clone(), "College of Engineering"));

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("slow question", &ctx()).await })
        };

        // Wait until the first turn is inside the backend call.
        backend.entered.notified().await;
        assert!(session.is_pending());

        // A second submission must be rejected and must not reach the
        // backend (the gated backend would deadlock this test if the
        // engine issued a second call).
        assert_eq!(session.submit("impatient", &ctx()).await, TurnOutcome::Busy);
        let log = session.log().await;
        assert_eq!(log.len(), 2, "rejected submit must not touch the log");

        backend.release.notify_one();
        assert_eq!(first.await.unwrap(), TurnOutcome::Completed);
        assert!(!session.is_pending());
        assert_eq!(session.log().await.len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_citations_are_preserved() {
        let duplicate = Citation::search("MMSU Reference", "https://example.edu/same");
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(GeneratedReply {
            text: "answer".to_string(),
            citations: vec![duplicate.clone(), duplicate.clone()],
        })]));
        let session = ChatSession::new(backend, "College of Dentistry");

        session.submit("question", &ctx()).await;

        let log = session.log().await;
        assert_eq!(log[2].citations.len(), 2);
        assert_eq!(log[2].citations[0], log[2].citations[1]);
    }

    #[tokio::test]
    async fn test_reset_reseeds_welcome_for_new_college() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(GeneratedReply::text("hi"))]));
        let session = ChatSession::new(backend, "College of Law");

        session.submit("hello", &ctx()).await;
        assert_eq!(session.log().await.len(), 3);

        session.reset("College of Medicine").await;

        let log = session.log().await;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].role, MessageRole::Assistant);
        assert!(log[0].content.contains("College of Medicine"));
        assert!(!session.is_pending());
    }
}
