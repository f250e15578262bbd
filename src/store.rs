//! Seams to the roster source and schedule storage.
//!
//! The scheduler itself does no I/O. A host application supplies the
//! roster and stores the result through these traits; `MemoryStore` is
//! an in-process implementation of all three.
//!
//! Storing a new plan replaces whatever the range held before: rows
//! dated inside the range are removed, then the new rows are inserted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::config::SchedulerConfig;
use crate::error::RosterError;
use crate::models::{DateRange, DayPlan, DutyRow, Member};
use crate::scheduler::{DutyScheduler, RosterStats};

/// Supplies duty members.
pub trait RosterSource {
    /// Members whose eligibility window overlaps `range`, in roster order.
    fn active_members(&self, range: &DateRange) -> Result<Vec<Member>, RosterError>;
}

/// Accepts generated plans.
pub trait ScheduleSink {
    /// Replaces all rows dated inside `range` with `rows`.
    ///
    /// Returns the number of rows removed.
    fn replace_range(&mut self, range: &DateRange, rows: Vec<DutyRow>) -> Result<usize, RosterError>;
}

/// Reads stored assignments back, e.g. to render a calendar.
pub trait CalendarSource {
    /// Stored rows dated inside `range`, ordered by date.
    fn rows_between(&self, range: &DateRange) -> Result<Vec<DutyRow>, RosterError>;
}

/// Flattens day plans into storable rows, in plan order.
pub fn to_rows(days: &[DayPlan]) -> Vec<DutyRow> {
    days.iter().flat_map(|d| d.rows()).collect()
}

/// Groups rows by date, keeping each day's row order.
pub fn calendar_by_date(rows: &[DutyRow]) -> BTreeMap<NaiveDate, Vec<String>> {
    let mut calendar: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for row in rows {
        calendar
            .entry(row.duty_date)
            .or_default()
            .push(row.user_id.clone());
    }
    calendar
}

/// Result of a regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct Regenerated {
    /// The new plan.
    pub days: Vec<DayPlan>,
    /// Fairness statistics for the new plan.
    pub stats: RosterStats,
    /// Rows removed from the range before inserting.
    pub replaced: usize,
}

/// Loads the roster, plans `range`, stores the plan, and reports stats.
///
/// Refuses to run with an empty roster so an accidental click cannot wipe
/// a range. Nothing is written if planning fails.
#[instrument(skip(store, config), fields(start = %range.start, end = %range.end))]
pub fn regenerate<S>(
    store: &mut S,
    range: &DateRange,
    config: &SchedulerConfig,
) -> Result<Regenerated, RosterError>
where
    S: RosterSource + ScheduleSink,
{
    let members = store.active_members(range)?;
    if members.is_empty() {
        return Err(RosterError::EmptyRoster);
    }

    let days = DutyScheduler::new(config.clone()).schedule(&members, range)?;
    let replaced = store.replace_range(range, to_rows(&days))?;
    let stats = RosterStats::calculate(&days, &members);

    info!(
        members = members.len(),
        days = days.len(),
        replaced,
        %stats,
        "regenerated duty roster"
    );

    Ok(Regenerated {
        days,
        stats,
        replaced,
    })
}

/// In-memory roster and schedule storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    members: Vec<Member>,
    rows: Vec<DutyRow>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `members`.
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members,
            rows: Vec::new(),
        }
    }

    /// Adds a member to the roster.
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Removes a member from the roster. Stored rows are kept.
    pub fn remove_member(&mut self, user_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.user_id != user_id);
        self.members.len() != before
    }

    /// All stored rows.
    pub fn rows(&self) -> &[DutyRow] {
        &self.rows
    }
}

impl RosterSource for MemoryStore {
    fn active_members(&self, range: &DateRange) -> Result<Vec<Member>, RosterError> {
        Ok(self
            .members
            .iter()
            .filter(|m| m.start_date <= range.end && range.start <= m.end_date)
            .cloned()
            .collect())
    }
}

impl ScheduleSink for MemoryStore {
    fn replace_range(&mut self, range: &DateRange, rows: Vec<DutyRow>) -> Result<usize, RosterError> {
        if let Some(stray) = rows.iter().find(|r| !range.contains(r.duty_date)) {
            return Err(RosterError::Store(format!(
                "row for {} lies outside {}..{}",
                stray.duty_date, range.start, range.end
            )));
        }

        let before = self.rows.len();
        self.rows.retain(|r| !range.contains(r.duty_date));
        let removed = before - self.rows.len();

        self.rows.extend(rows);
        self.rows.sort_by_key(|r| r.duty_date);
        Ok(removed)
    }
}

impl CalendarSource for MemoryStore {
    fn rows_between(&self, range: &DateRange) -> Result<Vec<DutyRow>, RosterError> {
        Ok(self
            .rows
            .iter()
            .filter(|r| range.contains(r.duty_date))
            .cloned()
            .collect())
    }
}
