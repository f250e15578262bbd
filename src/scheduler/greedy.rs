//! Greedy chronological assignment.
//!
//! # Algorithm
//!
//! Days are processed earliest first. For each day:
//! 1. Rank the available members with the rule engine (urgency, then
//!    debt, then fewest assigned, then roster order).
//! 2. Take the top `min(slots, available)` and bump their counts.
//! 3. Every member available today loses one remaining chance, picked or not.
//!
//! Members whose availability lies late in the range only show their
//! debt once their days arrive; the refinement stage evens out what the
//! chronological pass leaves behind.
//!
//! # Complexity
//! O(d * m log m) where d = days, m = members available per day.

use tracing::trace;

use super::planner::Availability;
use crate::dispatching::{DutyContext, RuleEngine};
use crate::models::DayPlan;

/// In-progress schedule in index form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Picked members per day, in pick order.
    pub picks: Vec<Vec<usize>>,
    /// Running assignment count per member.
    pub assigned: Vec<i64>,
}

impl Draft {
    /// Converts the draft into day plans, resolving indices to IDs.
    pub fn to_day_plans(&self, availability: &Availability) -> Vec<DayPlan> {
        availability
            .days
            .iter()
            .zip(&self.picks)
            .map(|(&date, picks)| {
                DayPlan::new(
                    date,
                    picks
                        .iter()
                        .map(|&m| availability.user_ids[m].clone())
                        .collect(),
                )
            })
            .collect()
    }
}

/// Builds the initial schedule day by day.
pub fn assign_greedy(availability: &Availability, slots: &[usize], engine: &RuleEngine) -> Draft {
    let member_count = availability.user_ids.len();
    let mut assigned = vec![0i64; member_count];
    let mut remaining_days = availability.present_days.clone();
    let mut picks = Vec::with_capacity(availability.day_count());

    for (d, available) in availability.day_members.iter().enumerate() {
        let need = slots[d].min(available.len());

        let ranked = {
            let ctx = DutyContext::new(
                &availability.targets,
                &assigned,
                &remaining_days,
                &availability.user_ids,
            );
            engine.sort_indices(available, &ctx)
        };

        let picked: Vec<usize> = ranked.into_iter().take(need).collect();
        for &m in &picked {
            assigned[m] += 1;
        }
        for &m in available {
            remaining_days[m] = remaining_days[m].saturating_sub(1);
        }

        trace!(
            day = %availability.days[d],
            available = available.len(),
            picked = picked.len(),
            "assigned day"
        );
        picks.push(picked);
    }

    Draft { picks, assigned }
}
