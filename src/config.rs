//! Scheduler settings.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```
//! use duty_roster::SchedulerConfig;
//!
//! let config: SchedulerConfig =
//!     serde_json::from_str(r#"{ "capacity": { "min_per_day": 2, "max_per_day": 3 } }"#).unwrap();
//! assert_eq!(config.refinement_rounds, 50);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::RosterError;
use crate::models::CapacityBounds;

/// Assignment rate used when nobody is available on any day.
pub const DEFAULT_RATE: f64 = 0.3;
/// Lower clamp for the ideal assignment rate.
pub const RATE_FLOOR: f64 = 0.15;
/// Upper clamp for the ideal assignment rate.
pub const RATE_CEILING: f64 = 0.55;
/// Upper bound on refinement rounds.
pub const REFINEMENT_ROUNDS: usize = 50;

/// Tunable parameters of the duty scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Per-day crew bounds.
    pub capacity: CapacityBounds,
    /// Maximum number of refinement rounds (each performs at most one swap).
    pub refinement_rounds: usize,
    /// Rate used when the roster has no available days at all.
    pub default_rate: f64,
    /// Lower clamp for the ideal rate.
    pub rate_floor: f64,
    /// Upper clamp for the ideal rate.
    pub rate_ceiling: f64,
    /// Ordering among members the ranking rules leave tied.
    pub tie_breaker: TieBreaker,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity: CapacityBounds::default(),
            refinement_rounds: REFINEMENT_ROUNDS,
            default_rate: DEFAULT_RATE,
            rate_floor: RATE_FLOOR,
            rate_ceiling: RATE_CEILING,
            tie_breaker: TieBreaker::default(),
        }
    }
}

impl SchedulerConfig {
    /// Creates a config with the given capacity bounds and default tuning.
    pub fn new(min_per_day: usize, max_per_day: usize) -> Self {
        Self {
            capacity: CapacityBounds::new(min_per_day, max_per_day),
            ..Self::default()
        }
    }

    /// Sets the capacity bounds.
    pub fn with_capacity(mut self, capacity: CapacityBounds) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the refinement round limit (0 disables refinement).
    pub fn with_refinement_rounds(mut self, rounds: usize) -> Self {
        self.refinement_rounds = rounds;
        self
    }

    /// Sets the fallback rate and the clamp interval.
    pub fn with_rate_limits(mut self, default_rate: f64, floor: f64, ceiling: f64) -> Self {
        self.default_rate = default_rate;
        self.rate_floor = floor;
        self.rate_ceiling = ceiling;
        self
    }

    /// Sets the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Checks bounds and rate settings.
    pub fn validate(&self) -> Result<(), RosterError> {
        self.capacity.validate()?;

        let rates = [self.default_rate, self.rate_floor, self.rate_ceiling];
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(RosterError::Configuration(
                "rates must be finite and non-negative".into(),
            ));
        }
        if self.rate_floor > self.rate_ceiling {
            return Err(RosterError::Configuration(format!(
                "rate_floor ({}) exceeds rate_ceiling ({})",
                self.rate_floor, self.rate_ceiling
            )));
        }
        Ok(())
    }

    /// Clamps a raw rate into `[rate_floor, rate_ceiling]`.
    #[inline]
    pub fn clamp_rate(&self, rate: f64) -> f64 {
        rate.clamp(self.rate_floor, self.rate_ceiling)
    }
}
