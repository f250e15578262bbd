//! Fair duty-roster scheduling.
//!
//! Given members with eligibility windows and a range of days, assigns
//! each day a crew between a minimum and maximum size while keeping each
//! member's duty load proportional to how many days they are around.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Member`, `DateRange`, `CapacityBounds`,
//!   `DayPlan`, `DutyRow`
//! - **`scheduler`**: The planning pipeline (`DutyScheduler`) and
//!   fairness statistics (`RosterStats`)
//! - **`dispatching`**: Ranking rules and the rule engine used to order
//!   members within a day
//! - **`validation`**: Roster integrity checks (duplicate IDs, inverted windows)
//! - **`store`**: Traits for the roster source and schedule storage, plus
//!   an in-memory implementation
//!
//! # Example
//!
//! ```
//! use duty_roster::{compute_stats, generate_schedule};
//! use duty_roster::models::{parse_date, Member};
//!
//! let members = vec![
//!     Member::parse("a", "Ada", "2024-01-01", "2024-01-03").unwrap(),
//!     Member::parse("b", "Bob", "2024-01-01", "2024-01-03").unwrap(),
//! ];
//! let start = parse_date("2024-01-01").unwrap();
//! let end = parse_date("2024-01-03").unwrap();
//!
//! let schedule = generate_schedule(&members, start, end, 1, 1).unwrap();
//! let stats = compute_stats(&schedule, &members);
//! assert_eq!(stats.total_assignments(), 3);
//! ```

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

use chrono::NaiveDate;

pub use config::SchedulerConfig;
pub use error::RosterError;
pub use scheduler::{DutyScheduler, RosterStats, ScheduleOutcome};

use models::{DateRange, DayPlan, Member};

/// Plans duty for every day from `range_start` to `range_end` inclusive.
///
/// Returns an empty list when `members` is empty or the range is
/// inverted. Fails on bad capacity bounds or malformed members.
pub fn generate_schedule(
    members: &[Member],
    range_start: NaiveDate,
    range_end: NaiveDate,
    min_per_day: usize,
    max_per_day: usize,
) -> Result<Vec<DayPlan>, RosterError> {
    DutyScheduler::new(SchedulerConfig::new(min_per_day, max_per_day))
        .schedule(members, &DateRange::new(range_start, range_end))
}

/// Per-member duty counts with their mean and population standard deviation.
///
/// Works on any schedule, including hand-edited ones.
pub fn compute_stats(schedule: &[DayPlan], members: &[Member]) -> RosterStats {
    RosterStats::calculate(schedule, members)
}
