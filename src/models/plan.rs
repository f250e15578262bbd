//! Day plan (solution) model.
//!
//! A schedule is a list of day plans in chronological order, one per day
//! of the requested range. Days nobody can cover carry an empty crew.
//!
//! `DutyRow` is the flattened form a persistence layer stores: one row
//! per (day, member) pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The duty crew for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// The day.
    pub date: NaiveDate,
    /// Members on duty, distinct, in pick order.
    pub user_ids: Vec<String>,
}

/// One stored (day, member) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRow {
    /// Day on duty.
    pub duty_date: NaiveDate,
    /// Member on duty.
    pub user_id: String,
}

impl DayPlan {
    /// Creates a day plan.
    pub fn new(date: NaiveDate, user_ids: Vec<String>) -> Self {
        Self { date, user_ids }
    }

    /// Creates a day plan with nobody on duty.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new())
    }

    /// Number of members on duty.
    #[inline]
    pub fn crew_size(&self) -> usize {
        self.user_ids.len()
    }

    /// Whether `user_id` is on duty this day.
    pub fn includes(&self, user_id: &str) -> bool {
        self.user_ids.iter().any(|id| id == user_id)
    }

    /// Flattens this day into storable rows.
    pub fn rows(&self) -> impl Iterator<Item = DutyRow> + '_ {
        self.user_ids.iter().map(move |id| DutyRow {
            duty_date: self.date,
            user_id: id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    #[test]
    fn test_day_plan_accessors() {
        let date = parse_date("2024-01-02").unwrap();
        let plan = DayPlan::new(date, vec!["a".into(), "b".into()]);
        assert_eq!(plan.crew_size(), 2);
        assert!(plan.includes("a"));
        assert!(!plan.includes("c"));
        assert_eq!(DayPlan::empty(date).crew_size(), 0);
    }

    #[test]
    fn test_day_plan_rows() {
        let date = parse_date("2024-01-02").unwrap();
        let plan = DayPlan::new(date, vec!["a".into(), "b".into()]);
        let rows: Vec<DutyRow> = plan.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].duty_date, date);
        assert_eq!(rows[1].user_id, "b");
    }

    #[test]
    fn test_day_plan_serde() {
        let plan = DayPlan::new(parse_date("2024-01-02").unwrap(), vec!["a".into()]);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-02","user_ids":["a"]}"#);
    }
}
