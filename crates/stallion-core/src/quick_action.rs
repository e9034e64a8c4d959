//! Quick action prompts.
//!
//! Canned prompt strings offered next to the chat input. Selecting one
//! feeds its prompt into the session engine unchanged; the trigger itself
//! holds no state.

use crate::session::ChatMode;

/// A single canned prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Short display label.
    pub label: &'static str,
    /// The full prompt submitted on selection.
    pub prompt: &'static str,
    /// Display icon.
    pub icon: &'static str,
}

static GENERAL_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Enrollment",
        prompt: "What are the current enrollment dates and requirements for the first semester?",
        icon: "\u{1F4DD}",
    },
    QuickAction {
        label: "Scholarships",
        prompt: "What scholarship programs are available for MMSU students?",
        icon: "\u{1F4B0}",
    },
    QuickAction {
        label: "Campus Map",
        prompt: "Show me important landmarks and buildings at MMSU Batac Main Campus.",
        icon: "\u{1F5FA}\u{FE0F}",
    },
];

static TUTORING_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Study Tips",
        prompt: "Provide effective study techniques and time management tips for my major.",
        icon: "\u{1F4DA}",
    },
    QuickAction {
        label: "Thesis Help",
        prompt: "Explain the general research methodology guidelines for MMSU students.",
        icon: "\u{270D}\u{FE0F}",
    },
    QuickAction {
        label: "Academic Policies",
        prompt: "What are the rules regarding grading systems and scholastic delinquency at MMSU?",
        icon: "\u{2696}\u{FE0F}",
    },
];

/// Returns the quick actions offered in `mode`.
pub fn actions_for_mode(mode: ChatMode) -> &'static [QuickAction] {
    match mode {
        ChatMode::General => &GENERAL_ACTIONS,
        ChatMode::Tutoring => &TUTORING_ACTIONS,
    }
}
