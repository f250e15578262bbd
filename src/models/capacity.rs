//! Per-day crew size bounds.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// How many members may be on duty on a single day.
///
/// A day never receives more members than are available on it, so the
/// effective crew size is `min(max_per_day, available)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityBounds {
    /// Slots every day starts with (>= 1).
    pub min_per_day: usize,
    /// Upper bound on slots per day (>= `min_per_day`).
    pub max_per_day: usize,
}

impl CapacityBounds {
    /// Creates new bounds without checking them.
    pub fn new(min_per_day: usize, max_per_day: usize) -> Self {
        Self {
            min_per_day,
            max_per_day,
        }
    }

    /// Creates bounds, rejecting `min < 1` and `max < min`.
    pub fn checked(min_per_day: usize, max_per_day: usize) -> Result<Self, RosterError> {
        let bounds = Self::new(min_per_day, max_per_day);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks the bounds.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.min_per_day < 1 {
            return Err(RosterError::Configuration(
                "min_per_day must be at least 1".into(),
            ));
        }
        if self.max_per_day < self.min_per_day {
            return Err(RosterError::Configuration(format!(
                "max_per_day ({}) is below min_per_day ({})",
                self.max_per_day, self.min_per_day
            )));
        }
        Ok(())
    }
}

impl Default for CapacityBounds {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_bounds() {
        assert!(CapacityBounds::checked(1, 1).is_ok());
        assert!(CapacityBounds::checked(2, 5).is_ok());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let err = CapacityBounds::checked(0, 3).unwrap_err();
        assert!(matches!(err, RosterError::Configuration(_)));
    }

    #[test]
    fn test_max_below_min_rejected() {
        let err = CapacityBounds::checked(3, 2).unwrap_err();
        assert_eq!(
            err,
            RosterError::Configuration("max_per_day (2) is below min_per_day (3)".into())
        );
    }
}
