//! Local-search refinement of a greedy draft.
//!
//! # Algorithm
//!
//! Each round scans days in date order and each day's picks in pick
//! order. For a picked member over target, it looks through that day's
//! unpicked available members (roster order) for the first one under
//! target who also has strictly fewer assignments than the member being
//! replaced. On a hit the two swap places, their counts move by one, and
//! the next round restarts the scan from the first day.
//!
//! A round without a swap ends refinement; otherwise it stops after the
//! configured number of rounds. Daily crew sizes never change.
//!
//! The "strictly fewer" condition means every swap moves one assignment
//! from a count `a` to a count `b < a`, which never raises the spread of
//! counts across the roster.
//!
//! # Complexity
//! O(rounds × d × m²) worst case, for d days and m members per day.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::greedy::Draft;
use super::planner::Availability;
use super::stats::mean_and_stddev;

/// Summary of a refinement run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinementReport {
    /// Rounds executed, including a final round that found nothing.
    pub rounds: usize,
    /// Swaps applied.
    pub swaps: usize,
    /// Population standard deviation of counts before refinement.
    pub stddev_before: f64,
    /// Population standard deviation of counts after refinement.
    pub stddev_after: f64,
}

/// A single replacement on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Swap {
    day: usize,
    slot: usize,
    incoming: usize,
}

/// Improves a draft in place with first-improvement swaps.
pub fn refine(availability: &Availability, draft: &mut Draft, max_rounds: usize) -> RefinementReport {
    let stddev_before = counts_stddev(&draft.assigned);
    let mut rounds = 0;
    let mut swaps = 0;

    while rounds < max_rounds {
        rounds += 1;
        let Some(swap) = find_swap(availability, draft) else {
            break;
        };

        let outgoing = draft.picks[swap.day][swap.slot];
        draft.picks[swap.day][swap.slot] = swap.incoming;
        draft.assigned[outgoing] -= 1;
        draft.assigned[swap.incoming] += 1;
        swaps += 1;
    }

    let stddev_after = counts_stddev(&draft.assigned);
    debug!(rounds, swaps, stddev_before, stddev_after, "refined draft");

    RefinementReport {
        rounds,
        swaps,
        stddev_before,
        stddev_after,
    }
}

fn find_swap(availability: &Availability, draft: &Draft) -> Option<Swap> {
    let targets = &availability.targets;
    let assigned = &draft.assigned;

    for (day, picks) in draft.picks.iter().enumerate() {
        for (slot, &over) in picks.iter().enumerate() {
            if assigned[over] - targets[over] <= 0 {
                continue;
            }

            let incoming = availability.day_members[day].iter().copied().find(|&c| {
                !picks.contains(&c)
                    && targets[c] - assigned[c] > 0
                    && assigned[c] < assigned[over]
            });

            if let Some(incoming) = incoming {
                return Some(Swap {
                    day,
                    slot,
                    incoming,
                });
            }
        }
    }

    None
}

fn counts_stddev(assigned: &[i64]) -> f64 {
    let values: Vec<f64> = assigned.iter().map(|&c| c as f64).collect();
    mean_and_stddev(&values).1
}
