//! Duty scheduling pipeline and fairness statistics.
//!
//! Planner → allocator → greedy assignment → refinement, with a separate
//! reporter for auditing any finished schedule.
//!
//! # Algorithm
//!
//! Targets are proportional to availability; days get crews sized between
//! the capacity bounds; a chronological greedy pass fills them by
//! urgency; bounded local search swaps over-target members for
//! under-target ones. It is a heuristic, not an optimal assignment.
//!
//! # Statistics
//!
//! `RosterStats` reports per-member duty counts, their mean and their
//! population standard deviation.

mod allocator;
mod duty;
mod greedy;
mod planner;
mod refine;
mod stats;

pub use allocator::allocate_slots;
pub use duty::{DutyScheduler, MemberTarget, ScheduleOutcome, ScheduleRequest};
pub use greedy::{assign_greedy, Draft};
pub use planner::{plan_availability, Availability};
pub use refine::{refine, RefinementReport};
pub use stats::{MemberCount, RosterStats, UnrosteredCount};
