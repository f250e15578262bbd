//! Ranking rules and rule engine for duty assignment.
//!
//! Each day, the greedy stage must decide which of the available members
//! go on duty first. That order is produced by a composable rule engine:
//! rules are applied in sequence and a later rule only matters when every
//! earlier rule ties.
//!
//! # Usage
//!
//! ```
//! use duty_roster::dispatching::{DutyContext, RuleEngine};
//! use duty_roster::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Urgency)
//!     .with_rule(rules::Debt)
//!     .with_rule(rules::FewestAssigned);
//!
//! let targets = [3, 1];
//! let assigned = [0, 0];
//! let remaining = [6, 1];
//! let ids = ["a".to_string(), "b".to_string()];
//! let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
//!
//! // a: 3/6 = 0.5, b: 1/1 = 1.0 → b is more urgent
//! assert_eq!(engine.sort_indices(&[0, 1], &ctx), vec![1, 0]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DutyContext;
pub use engine::{RuleEngine, TieBreaker};

use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = higher priority (put on duty first).
pub type RuleScore = f64;

/// A rule that ranks members for a day's duty slots.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that favour "more of
/// something" return the negated quantity.
pub trait DutyRule: Send + Sync + Debug {
    /// Rule name (e.g., "URGENCY").
    fn name(&self) -> &'static str;

    /// Scores member `member` (a roster index) under the current state.
    fn evaluate(&self, member: usize, context: &DutyContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
