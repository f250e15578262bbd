//! Assignment state passed to ranking rules.

/// Snapshot of the running assignment state, indexed by roster position.
///
/// Borrowed from the greedy stage for the duration of one day's ranking.
#[derive(Debug, Clone, Copy)]
pub struct DutyContext<'a> {
    /// Fairness target per member.
    pub targets: &'a [i64],
    /// Days assigned so far per member.
    pub assigned: &'a [i64],
    /// Not-yet-processed available days per member, today included.
    pub remaining_days: &'a [usize],
    /// Member IDs, for ID-based tie-breaking.
    pub user_ids: &'a [String],
}

impl<'a> DutyContext<'a> {
    /// Creates a context over the given per-member slices.
    pub fn new(
        targets: &'a [i64],
        assigned: &'a [i64],
        remaining_days: &'a [usize],
        user_ids: &'a [String],
    ) -> Self {
        Self {
            targets,
            assigned,
            remaining_days,
            user_ids,
        }
    }

    /// Target minus assigned; negative once a member is over target.
    #[inline]
    pub fn debt(&self, member: usize) -> i64 {
        self.targets[member] - self.assigned[member]
    }

    /// Remaining chances, never below 1.
    #[inline]
    pub fn chances(&self, member: usize) -> usize {
        self.remaining_days[member].max(1)
    }
}
