//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for members that should be put on duty
//! first.

use super::{DutyContext, DutyRule, RuleScore};

/// Debt per remaining chance.
///
/// `(target - assigned) / max(remaining_days, 1)`, highest first. A member
/// with few chances left and a large debt must be picked now or will end
/// up short; a member with many chances can wait.
#[derive(Debug, Clone, Copy)]
pub struct Urgency;

impl DutyRule for Urgency {
    fn name(&self) -> &'static str {
        "URGENCY"
    }

    fn evaluate(&self, member: usize, context: &DutyContext<'_>) -> RuleScore {
        -(context.debt(member) as f64 / context.chances(member) as f64)
    }

    fn description(&self) -> &'static str {
        "Debt per remaining available day"
    }
}

/// Raw target debt, highest first.
#[derive(Debug, Clone, Copy)]
pub struct Debt;

impl DutyRule for Debt {
    fn name(&self) -> &'static str {
        "DEBT"
    }

    fn evaluate(&self, member: usize, context: &DutyContext<'_>) -> RuleScore {
        -(context.debt(member) as f64)
    }

    fn description(&self) -> &'static str {
        "Largest remaining target debt"
    }
}

/// Fewest days assigned so far, lowest first.
#[derive(Debug, Clone, Copy)]
pub struct FewestAssigned;

impl DutyRule for FewestAssigned {
    fn name(&self) -> &'static str {
        "FEWEST"
    }

    fn evaluate(&self, member: usize, context: &DutyContext<'_>) -> RuleScore {
        context.assigned[member] as f64
    }

    fn description(&self) -> &'static str {
        "Fewest assignments so far"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("m{i}")).collect()
    }

    #[test]
    fn test_urgency() {
        let targets = [4, 2];
        let assigned = [0, 0];
        let remaining = [8, 2];
        let ids = ids(2);
        let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
        // 4/8 = 0.5 vs 2/2 = 1.0
        assert!(Urgency.evaluate(1, &ctx) < Urgency.evaluate(0, &ctx));
        assert!((Urgency.evaluate(0, &ctx) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_urgency_zero_remaining_uses_one() {
        let targets = [2];
        let assigned = [0];
        let remaining = [0];
        let ids = ids(1);
        let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
        assert!((Urgency.evaluate(0, &ctx) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_urgency_over_target_is_positive() {
        let targets = [1];
        let assigned = [3];
        let remaining = [2];
        let ids = ids(1);
        let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
        assert!(Urgency.evaluate(0, &ctx) > 0.0);
    }

    #[test]
    fn test_debt() {
        let targets = [5, 2];
        let assigned = [1, 1];
        let remaining = [3, 3];
        let ids = ids(2);
        let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
        assert!(Debt.evaluate(0, &ctx) < Debt.evaluate(1, &ctx));
    }

    #[test]
    fn test_fewest_assigned() {
        let targets = [5, 5];
        let assigned = [3, 1];
        let remaining = [3, 3];
        let ids = ids(2);
        let ctx = DutyContext::new(&targets, &assigned, &remaining, &ids);
        assert!(FewestAssigned.evaluate(1, &ctx) < FewestAssigned.evaluate(0, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Urgency.name(), "URGENCY");
        assert_eq!(Debt.description(), "Largest remaining target debt");
        assert_eq!(FewestAssigned.name(), "FEWEST");
    }
}
