//! Conversation mode types and the mode controller.

use serde::{Deserialize, Serialize};

use crate::identity::IdentityGate;

/// The conversational policy context sent to the backend and used for
/// access gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatMode {
    /// Open assistance for any university query.
    #[default]
    General,
    /// Identity-gated academic tutoring.
    Tutoring,
}

impl std::fmt::Display for ChatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatMode::General => write!(f, "General"),
            ChatMode::Tutoring => write!(f, "Tutoring"),
        }
    }
}

/// Outcome of a mode transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// The controller switched to the requested mode.
    Switched,
    /// The requested mode was already active (no-op).
    Unchanged,
    /// Tutoring was requested without a verified student identifier.
    ///
    /// The transition is suspended, not denied: the caller resolves it
    /// through the identity gate's verification flow and re-requests.
    VerificationRequired,
}

/// A flat two-state switch between [`ChatMode::General`] and
/// [`ChatMode::Tutoring`].
///
/// The transition into Tutoring is mediated by the [`IdentityGate`]; the
/// controller itself never blocks, it delegates.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: ChatMode,
}

impl ModeController {
    /// Creates a controller in the default General mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active mode.
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    /// Requests a transition to `target`.
    ///
    /// Leaving Tutoring is always permitted. Entering Tutoring is
    /// permitted only when `gate` reports a verified identifier;
    /// otherwise the transition is suspended and the mode is unchanged.
    pub fn request(&mut self, target: ChatMode, gate: &IdentityGate) -> ModeTransition {
        if target == self.mode {
            return ModeTransition::Unchanged;
        }
        if target == ChatMode::Tutoring && !gate.is_eligible() {
            return ModeTransition::VerificationRequired;
        }
        self.mode = target;
        ModeTransition::Switched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_general() {
        assert_eq!(ModeController::new().mode(), ChatMode::General);
    }

    #[test]
    fn test_tutoring_requires_verified_identifier() {
        let mut controller = ModeController::new();
        let gate = IdentityGate::new();

        let outcome = controller.request(ChatMode::Tutoring, &gate);

        assert_eq!(outcome, ModeTransition::VerificationRequired);
        assert_eq!(controller.mode(), ChatMode::General);
    }

    #[test]
    fn test_tutoring_unlocks_after_verification() {
        let mut controller = ModeController::new();
        let mut gate = IdentityGate::new();

        assert_eq!(
            controller.request(ChatMode::Tutoring, &gate),
            ModeTransition::VerificationRequired
        );

        gate.verify("21-123456").unwrap();

        assert_eq!(
            controller.request(ChatMode::Tutoring, &gate),
            ModeTransition::Switched
        );
        assert_eq!(controller.mode(), ChatMode::Tutoring);
    }

    #[test]
    fn test_leaving_tutoring_is_unconditional() {
        let mut controller = ModeController::new();
        let mut gate = IdentityGate::new();
        gate.verify("21-123456").unwrap();
        controller.request(ChatMode::Tutoring, &gate);

        // Back to General works even against an empty gate.
        let empty = IdentityGate::new();
        assert_eq!(
            controller.request(ChatMode::General, &empty),
            ModeTransition::Switched
        );
        assert_eq!(controller.mode(), ChatMode::General);
    }

    #[test]
    fn test_reentrant_transition_is_noop() {
        let mut controller = ModeController::new();
        let gate = IdentityGate::new();
        assert_eq!(
            controller.request(ChatMode::General, &gate),
            ModeTransition::Unchanged
        );
    }
}
