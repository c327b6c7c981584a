use std::hash::{Hash, Hasher};

use super::calendar::{Duty, Shift, Status, Team};
use super::preferences::Preferences;
use super::statistics::Statistics;

/// Position of an employee in [`Roster::employees`](super::Roster::employees).
pub type EmployeeIdx = usize;

/// A member of staff who can be given tasks.
///
/// Identity is the name: two records with the same name are the same
/// employee even if their statistics differ.
#[derive(Debug, Clone)]
pub struct Employee {
    pub name: String,
    pub team: Team,
    /// Availability per shift, indexed by [`Shift::index`].
    pub statuses: [Status; Shift::COUNT],
    pub preferences: Preferences,
    pub statistics: Statistics,
}

impl Employee {
    /// An employee available all week for every duty, with no history.
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            name: name.into(),
            team,
            statuses: [Status::Available; Shift::COUNT],
            preferences: Preferences::all(),
            statistics: Statistics::default(),
        }
    }

    pub fn with_statuses(mut self, statuses: [Status; Shift::COUNT]) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_status(mut self, shift: Shift, status: Status) -> Self {
        self.statuses[shift.index()] = status;
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }

    #[inline]
    pub fn status(&self, shift: Shift) -> Status {
        self.statuses[shift.index()]
    }

    /// Shifts this week that count toward the workload denominator.
    pub fn working_shift_count(&self) -> u32 {
        self.statuses
            .iter()
            .filter(|status| status.counts_as_working())
            .count() as u32
    }

    /// Shifts worked in the historical window.
    #[inline]
    pub fn prior_shift_count(&self) -> u32 {
        self.statistics.shift_count
    }

    /// Tasks of every duty performed in the historical window.
    #[inline]
    pub fn prior_task_count(&self) -> u64 {
        self.statistics.prior_task_count()
    }

    /// Returns true if the employee is in and willing to do `duty` in `shift`.
    #[inline]
    pub fn can_perform(&self, duty: Duty, shift: Shift) -> bool {
        self.status(shift) == Status::Available && self.preferences.get(shift, duty)
    }

    /// Returns true unless the employee has opted out of every duty.
    pub fn can_do_tasks(&self) -> bool {
        !self.preferences.is_all_no()
    }

    #[inline]
    pub fn is_principal(&self) -> bool {
        self.team == Team::Principals
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
