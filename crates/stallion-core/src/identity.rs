//! Student identity gate.
//!
//! Holds and validates the student number that unlocks Tutoring mode.
//! Format validity is the sole acceptance criterion: there is no checksum
//! and no registry lookup against a student database.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// MMSU student numbers are two digits, a hyphen, then six digits
/// (e.g. `21-123456`).
static STUDENT_ID_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{6}$").expect("student id pattern is valid"));

/// Validation failure for a candidate student number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The candidate does not match the required `YY-XXXXXX` format.
    #[error("Please enter valid MMSU Student Number (Format: YY-XXXXXX)")]
    InvalidFormat,
}

/// Validates and holds an optional student identifier.
///
/// The gate exposes a read-only eligibility check to the mode controller;
/// a stored identifier implies Tutoring-mode eligibility.
#[derive(Debug, Clone, Default)]
pub struct IdentityGate {
    student_id: Option<String>,
}

impl IdentityGate {
    /// Creates an empty gate with no verified identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` against the student number format.
    ///
    /// On match the candidate is stored as the verified identifier. On
    /// mismatch the stored identifier is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidFormat`] when the candidate does
    /// not match `YY-XXXXXX`.
    pub fn verify(&mut self, candidate: &str) -> Result<(), IdentityError> {
        if !STUDENT_ID_FORMAT.is_match(candidate) {
            return Err(IdentityError::InvalidFormat);
        }
        self.student_id = Some(candidate.to_string());
        Ok(())
    }

    /// Returns `true` when a verified identifier is present.
    pub fn is_eligible(&self) -> bool {
        self.student_id.is_some()
    }

    /// Returns the verified identifier, if any.
    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_student_number_is_stored() {
        let mut gate = IdentityGate::new();
        assert!(gate.verify("21-123456").is_ok());
        assert!(gate.is_eligible());
        assert_eq!(gate.student_id(), Some("21-123456"));
    }

    #[test]
    fn test_malformed_candidates_are_rejected() {
        let mut gate = IdentityGate::new();
        for candidate in ["211-23456", "21123456", "ab-123456", "", "21-1234567"] {
            assert_eq!(gate.verify(candidate), Err(IdentityError::InvalidFormat));
            assert!(!gate.is_eligible());
            assert_eq!(gate.student_id(), None);
        }
    }

    #[test]
    fn test_failed_verify_keeps_previous_identifier() {
        let mut gate = IdentityGate::new();
        gate.verify("21-123456").unwrap();
        assert!(gate.verify("oops").is_err());
        assert_eq!(gate.student_id(), Some("21-123456"));
    }

    #[test]
    fn test_error_message_names_the_format() {
        let mut gate = IdentityGate::new();
        let err = gate.verify("21123456").unwrap_err();
        assert!(err.to_string().contains("YY-XXXXXX"));
    }
}
