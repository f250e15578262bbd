//! Rule engine for multi-criteria member ranking.
//!
//! Composes ranking rules in sequence with a configurable final
//! tie-breaking strategy.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::rules::{Debt, FewestAssigned, Urgency};
use super::{DutyContext, DutyRule};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Keep input (roster) order. The sort is stable.
    #[default]
    RosterOrder,
    /// Lexicographic by member ID.
    ById,
}

/// A composable rule engine for member ranking.
///
/// Rules are compared in the order they were added; the next rule is
/// consulted only when the previous one scores two members identically.
///
/// Scores are compared exactly, without an epsilon. The built-in rules
/// produce ratios of small integers, and equal ratios round to the same
/// `f64`, so exact comparison is both correct and a total order.
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DutyRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::RosterOrder,
        }
    }

    /// The standard duty ordering: urgency, then debt, then fewest assigned.
    pub fn duty_default() -> Self {
        Self::new()
            .with_rule(Urgency)
            .with_rule(Debt)
            .with_rule(FewestAssigned)
    }

    /// Appends a rule.
    pub fn with_rule<R: DutyRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sorts candidate members by priority (highest priority first).
    ///
    /// `candidates` are roster indices; the result is a reordering of them.
    pub fn sort_indices(&self, candidates: &[usize], context: &DutyContext<'_>) -> Vec<usize> {
        let mut order = candidates.to_vec();
        order.sort_by(|&a, &b| self.compare(a, b, context));
        order
    }

    /// Returns the highest-priority candidate.
    pub fn select_best(&self, candidates: &[usize], context: &DutyContext<'_>) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .reduce(|best, c| {
                if self.compare(c, best, context) == Ordering::Less {
                    c
                } else {
                    best
                }
            })
    }

    /// Scores a member under every rule, in rule order.
    pub fn evaluate(&self, member: usize, context: &DutyContext<'_>) -> Vec<f64> {
        self.rules
            .iter()
            .map(|r| r.evaluate(member, context))
            .collect()
    }

    fn compare(&self, a: usize, b: usize, context: &DutyContext<'_>) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if score_a != score_b {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::RosterOrder => Ordering::Equal,
            TieBreaker::ById => context.user_ids[a].cmp(&context.user_ids[b]),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::duty_default()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
