//! Day-capacity allocation.
//!
//! # Algorithm
//!
//! Every day starts with `min_per_day` slots. The extra slots
//! `avg_total - days * min_per_day` (a half rounds up) are handed out
//! one at a time:
//!
//! 1. Rank days once by descending slack (`available - allocated`), then
//!    by descending available count, then by date.
//! 2. Sweep the ranking, adding a slot to each day whose count is still
//!    below both `max_per_day` and its available count.
//! 3. Repeat sweeps until the extra slots run out or a sweep adds nothing.
//!
//! The ranking is static: it is not re-sorted between increments, so
//! a sweep spreads at most one extra slot per day before any day gets
//! a second.

use tracing::debug;

use super::planner::Availability;
use crate::models::CapacityBounds;

/// Computes the slot count for each day.
///
/// A day with fewer available members than `min_per_day` keeps
/// `min_per_day` slots here; the assignment stage fills only what it can.
pub fn allocate_slots(availability: &Availability, bounds: &CapacityBounds) -> Vec<usize> {
    let day_count = availability.day_count();
    let mut slots = vec![bounds.min_per_day; day_count];

    let spread = day_count * bounds.max_per_day.saturating_sub(bounds.min_per_day);
    let mut remaining = spread.div_ceil(2);
    let extra = remaining;
    if remaining == 0 {
        return slots;
    }

    let mut ranking: Vec<usize> = (0..day_count).collect();
    ranking.sort_by(|&a, &b| {
        let avail_a = availability.available_on(a);
        let avail_b = availability.available_on(b);
        let slack_a = avail_a as i64 - slots[a] as i64;
        let slack_b = avail_b as i64 - slots[b] as i64;
        slack_b.cmp(&slack_a).then(avail_b.cmp(&avail_a))
    });

    while remaining > 0 {
        let mut progressed = false;
        for &d in &ranking {
            if remaining == 0 {
                break;
            }
            let cur = slots[d];
            if cur < bounds.max_per_day && cur < availability.available_on(d) {
                slots[d] = cur + 1;
                remaining -= 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    debug!(extra, unplaced = remaining, "allocated day slots");
    slots
}
