//! Duty scheduler: the full planning pipeline.
//!
//! # Algorithm
//!
//! 1. Validate settings and roster (fail before producing anything).
//! 2. Plan availability and fairness targets.
//! 3. Allocate a slot count to every day.
//! 4. Assign members greedily, day by day.
//! 5. Refine with bounded first-improvement swaps.
//!
//! # Complexity
//! O(d * m log m + rounds * d * m²) for d days and m members.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::allocator::allocate_slots;
use super::greedy::assign_greedy;
use super::planner::plan_availability;
use super::refine::{refine, RefinementReport};
use crate::config::SchedulerConfig;
use crate::dispatching::RuleEngine;
use crate::error::RosterError;
use crate::models::{DateRange, DayPlan, Member};
use crate::validation::validate_roster;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Members eligible for duty.
    pub members: Vec<Member>,
    /// Days to cover.
    pub range: DateRange,
    /// Scheduler settings.
    pub config: SchedulerConfig,
}

impl ScheduleRequest {
    /// Creates a request with default settings.
    pub fn new(members: Vec<Member>, range: DateRange) -> Self {
        Self {
            members,
            range,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the scheduler settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Planned workload for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTarget {
    /// Member ID.
    pub user_id: String,
    /// Days the member is available in the range.
    pub present_days: usize,
    /// Expected duty days.
    pub target: i64,
    /// Duty days actually assigned.
    pub assigned: i64,
}

/// Everything the pipeline produced for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// One plan per day of the range, in order.
    pub days: Vec<DayPlan>,
    /// Per-member targets and final counts, in roster order.
    pub targets: Vec<MemberTarget>,
    /// Slot count chosen for each day.
    pub slots: Vec<usize>,
    /// Clamped assignment rate used for the targets.
    pub ideal_rate: f64,
    /// What refinement did.
    pub refinement: RefinementReport,
}

impl ScheduleOutcome {
    fn empty() -> Self {
        Self {
            days: Vec::new(),
            targets: Vec::new(),
            slots: Vec::new(),
            ideal_rate: 0.0,
            refinement: RefinementReport {
                rounds: 0,
                swaps: 0,
                stddev_before: 0.0,
                stddev_after: 0.0,
            },
        }
    }
}

/// Fair duty-roster scheduler.
///
/// Gives every day a crew between `min_per_day` and `max_per_day`
/// (never more than are available), and spreads duty so each member's
/// count tracks their availability.
///
/// # Example
///
/// ```
/// use duty_roster::{DutyScheduler, SchedulerConfig};
/// use duty_roster::models::{DateRange, Member};
///
/// let members = vec![
///     Member::parse("a", "Ada", "2024-01-01", "2024-01-03").unwrap(),
///     Member::parse("b", "Bob", "2024-01-01", "2024-01-03").unwrap(),
/// ];
/// let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
///
/// let scheduler = DutyScheduler::new(SchedulerConfig::new(1, 1));
/// let days = scheduler.schedule(&members, &range).unwrap();
/// assert_eq!(days.len(), 3);
/// assert!(days.iter().all(|d| d.user_ids.len() == 1));
/// ```
#[derive(Debug, Clone)]
pub struct DutyScheduler {
    config: SchedulerConfig,
    rule_engine: RuleEngine,
}

impl DutyScheduler {
    /// Creates a scheduler with the standard ranking rules.
    pub fn new(config: SchedulerConfig) -> Self {
        let rule_engine = RuleEngine::duty_default().with_final_tie_breaker(config.tie_breaker);
        Self {
            config,
            rule_engine,
        }
    }

    /// Replaces the ranking rules used by the greedy stage.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The active settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the pipeline and returns the day plans.
    pub fn schedule(&self, members: &[Member], range: &DateRange) -> Result<Vec<DayPlan>, RosterError> {
        Ok(self.run(members, range)?.days)
    }

    /// Schedules from a request, using the request's settings.
    pub fn schedule_request(request: &ScheduleRequest) -> Result<ScheduleOutcome, RosterError> {
        Self::new(request.config.clone()).run(&request.members, &request.range)
    }

    /// Runs the pipeline and returns the plans with diagnostics.
    ///
    /// An empty roster or an empty/inverted range yields an empty outcome.
    #[instrument(skip_all, fields(members = members.len(), days = range.len()))]
    pub fn run(&self, members: &[Member], range: &DateRange) -> Result<ScheduleOutcome, RosterError> {
        self.config.validate()?;
        validate_roster(members).map_err(RosterError::Validation)?;

        if members.is_empty() || range.is_empty() {
            debug!(
                start = %range.start,
                end = %range.end,
                "nothing to schedule"
            );
            return Ok(ScheduleOutcome::empty());
        }

        let availability = plan_availability(members, range, &self.config);
        let slots = allocate_slots(&availability, &self.config.capacity);
        let mut draft = assign_greedy(&availability, &slots, &self.rule_engine);
        let refinement = refine(&availability, &mut draft, self.config.refinement_rounds);

        let targets = members
            .iter()
            .enumerate()
            .map(|(i, m)| MemberTarget {
                user_id: m.user_id.clone(),
                present_days: availability.present_days[i],
                target: availability.targets[i],
                assigned: draft.assigned[i],
            })
            .collect();

        Ok(ScheduleOutcome {
            days: draft.to_day_plans(&availability),
            targets,
            slots,
            ideal_rate: availability.ideal_rate,
            refinement,
        })
    }
}

impl Default for DutyScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
