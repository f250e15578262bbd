//! Roster fairness statistics.
//!
//! Aggregates a finished (or hand-edited) schedule into per-member duty
//! counts and their spread.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | count | Days a member appears on duty |
//! | mean | Σ count / N over the roster |
//! | stddev | sqrt(Σ (count - mean)² / N), population form |
//!
//! Members with zero duty days are part of N. IDs found in the schedule
//! but missing from the roster are reported separately and kept out of
//! the mean and standard deviation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DayPlan, Member};

/// Duty count for one rostered member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCount {
    /// Member ID.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Days on duty.
    pub count: usize,
}

/// Duty count for an ID that is not on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnrosteredCount {
    /// The unknown ID.
    pub user_id: String,
    /// Days on duty.
    pub count: usize,
}

/// Fairness statistics for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    /// One entry per roster member, in roster order.
    pub per_member: Vec<MemberCount>,
    /// Mean duty count over the roster.
    pub mean: f64,
    /// Population standard deviation of duty counts over the roster.
    pub stddev: f64,
    /// IDs on the schedule that the roster does not know, in first-seen order.
    pub unrostered: Vec<UnrosteredCount>,
}

impl RosterStats {
    /// Computes statistics from a schedule and its roster.
    ///
    /// # Arguments
    /// * `schedule` - Day plans, from the scheduler or edited by hand.
    /// * `members` - The roster to report on.
    pub fn calculate(schedule: &[DayPlan], members: &[Member]) -> Self {
        let mut counts: HashMap<&str, usize> =
            members.iter().map(|m| (m.user_id.as_str(), 0)).collect();
        let mut unrostered: Vec<UnrosteredCount> = Vec::new();

        for day in schedule {
            for id in &day.user_ids {
                if let Some(c) = counts.get_mut(id.as_str()) {
                    *c += 1;
                } else if let Some(u) = unrostered.iter_mut().find(|u| &u.user_id == id) {
                    u.count += 1;
                } else {
                    unrostered.push(UnrosteredCount {
                        user_id: id.clone(),
                        count: 1,
                    });
                }
            }
        }

        let per_member: Vec<MemberCount> = members
            .iter()
            .map(|m| MemberCount {
                user_id: m.user_id.clone(),
                name: m.name.clone(),
                count: counts.get(m.user_id.as_str()).copied().unwrap_or(0),
            })
            .collect();

        let values: Vec<f64> = per_member.iter().map(|c| c.count as f64).collect();
        let (mean, stddev) = mean_and_stddev(&values);

        Self {
            per_member,
            mean,
            stddev,
            unrostered,
        }
    }

    /// Sum of roster members' counts.
    pub fn total_assignments(&self) -> usize {
        self.per_member.iter().map(|c| c.count).sum()
    }

    /// Count for a rostered member.
    pub fn count_for(&self, user_id: &str) -> Option<usize> {
        self.per_member
            .iter()
            .find(|c| c.user_id == user_id)
            .map(|c| c.count)
    }

    /// Largest minus smallest count (0 for an empty roster).
    pub fn range(&self) -> usize {
        let max = self.per_member.iter().map(|c| c.count).max().unwrap_or(0);
        let min = self.per_member.iter().map(|c| c.count).min().unwrap_or(0);
        max - min
    }
}

impl fmt::Display for RosterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean {:.1}, stddev {:.2}", self.mean, self.stddev)
    }
}

/// Mean and population standard deviation; `(0.0, 0.0)` when empty.
pub(crate) fn mean_and_stddev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
