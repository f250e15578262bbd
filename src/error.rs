//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before any schedule is produced.
///
/// The scheduler either completes for the whole input or fails here;
/// it never returns a partially built plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Capacity bounds or scheduler settings are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One or more roster records are malformed.
    #[error("invalid roster: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A regeneration was requested with nobody on the roster.
    #[error("no duty members to schedule")]
    EmptyRoster,

    /// The roster source or schedule sink failed.
    #[error("store error: {0}")]
    Store(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
