//! Availability and fairness-target planning.
//!
//! # Algorithm
//!
//! 1. Enumerate every day of the range.
//! 2. For each day, collect the members whose window covers it (roster order).
//! 3. `present_days[m]` = number of days member `m` is available.
//! 4. `avg_total = days * (min_per_day + max_per_day) / 2`: the expected
//!    total number of duty slots over the range.
//! 5. `ideal_rate = avg_total / Σ present_days`, clamped to
//!    `[rate_floor, rate_ceiling]` (or `default_rate` when nobody is ever
//!    available).
//! 6. `target[m] = round(present_days[m] * ideal_rate)`.
//!
//! The clamp keeps sparse rosters from producing huge targets and
//! abundant rosters from overcrowding.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::models::{DateRange, Member};

/// Availability snapshot shared by every later stage.
///
/// Members are addressed by roster index throughout.
#[derive(Debug, Clone)]
pub struct Availability {
    /// Member IDs in roster order.
    pub user_ids: Vec<String>,
    /// Days of the range, in order.
    pub days: Vec<NaiveDate>,
    /// Members available on each day, in roster order.
    pub day_members: Vec<Vec<usize>>,
    /// Available-day count per member.
    pub present_days: Vec<usize>,
    /// Sum of `present_days`.
    pub total_present: usize,
    /// Midpoint between the minimum and maximum total slot counts.
    pub avg_total: f64,
    /// Clamped assignments-per-available-day rate.
    pub ideal_rate: f64,
    /// Fairness target per member.
    pub targets: Vec<i64>,
}

impl Availability {
    /// Number of days in the range.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of members available on day `d`.
    #[inline]
    pub fn available_on(&self, d: usize) -> usize {
        self.day_members[d].len()
    }
}

/// Builds the availability snapshot and per-member targets.
pub fn plan_availability(
    members: &[Member],
    range: &DateRange,
    config: &SchedulerConfig,
) -> Availability {
    let days = range.days();
    let mut present_days = vec![0usize; members.len()];

    let day_members: Vec<Vec<usize>> = days
        .iter()
        .map(|&day| {
            let available: Vec<usize> = members
                .iter()
                .enumerate()
                .filter(|(_, m)| m.is_available_on(day))
                .map(|(i, _)| i)
                .collect();
            for &i in &available {
                present_days[i] += 1;
            }
            available
        })
        .collect();

    let total_present: usize = present_days.iter().sum();
    let bounds = config.capacity;
    let min_total = days.len() * bounds.min_per_day;
    let max_total = days.len() * bounds.max_per_day;
    let avg_total = (min_total + max_total) as f64 / 2.0;

    let raw_rate = if total_present > 0 {
        avg_total / total_present as f64
    } else {
        config.default_rate
    };
    let ideal_rate = config.clamp_rate(raw_rate);

    let targets = present_days
        .iter()
        .map(|&p| (p as f64 * ideal_rate).round() as i64)
        .collect();

    debug!(
        days = days.len(),
        total_present,
        avg_total,
        raw_rate,
        ideal_rate,
        "planned availability"
    );

    Availability {
        user_ids: members.iter().map(|m| m.user_id.clone()).collect(),
        days,
        day_members,
        present_days,
        total_present,
        avg_total,
        ideal_rate,
        targets,
    }
}
