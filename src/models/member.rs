//! Member model.
//!
//! A member is a person eligible for duty during an inclusive window
//! of calendar days. Outside that window they are never assigned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parse_date;
use crate::error::RosterError;

/// A person who can be put on duty.
///
/// Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Identifier, unique within a roster.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// First eligible day (inclusive).
    pub start_date: NaiveDate,
    /// Last eligible day (inclusive).
    pub end_date: NaiveDate,
}

impl Member {
    /// Creates a new member.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// Creates a member from `YYYY-MM-DD` strings.
    pub fn parse(
        user_id: impl Into<String>,
        name: impl Into<String>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, RosterError> {
        Ok(Self::new(
            user_id,
            name,
            parse_date(start_date)?,
            parse_date(end_date)?,
        ))
    }

    /// Whether the member may serve on `day`.
    #[inline]
    pub fn is_available_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Whether the eligibility window is well formed.
    #[inline]
    pub fn has_valid_window(&self) -> bool {
        self.start_date <= self.end_date
    }
}
