//! Input validation for duty rosters.
//!
//! Checks structural integrity of the member list before scheduling.
//! Detects:
//! - Duplicate member IDs
//! - Blank member IDs
//! - Eligibility windows that end before they start
//!
//! All issues are collected so a caller can report them at once.

use std::collections::HashSet;

use crate::models::Member;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two members share the same ID.
    DuplicateId,
    /// A member has an empty (or whitespace-only) ID.
    EmptyUserId,
    /// A member's `start_date` is after its `end_date`.
    InvertedWindow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. Every member has a non-blank ID
/// 2. No two members share an ID
/// 3. Every eligibility window satisfies `start_date <= end_date`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(members: &[Member]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for m in members {
        if m.user_id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyUserId,
                format!("Member '{}' has no ID", m.name),
            ));
        } else if !seen.insert(m.user_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate member ID: {}", m.user_id),
            ));
        }

        if !m.has_valid_window() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedWindow,
                format!(
                    "Member '{}' window ends ({}) before it starts ({})",
                    m.user_id, m.end_date, m.start_date
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
