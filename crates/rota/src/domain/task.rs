use std::fmt;

use rota_core::{PlanningEntity, PlanningId};
use serde::{Deserialize, Serialize};

use super::calendar::{Duty, Shift};
use super::employee::EmployeeIdx;

/// Stable identity of a task, increasing in creation order.
///
/// Pairwise constraints use `id1 < id2` to visit each unordered pair of
/// tasks exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The optimizer-owned variable of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Assignment {
    #[default]
    Unassigned,
    AssignedTo(EmployeeIdx),
}

impl Assignment {
    #[inline]
    pub fn employee(self) -> Option<EmployeeIdx> {
        match self {
            Assignment::Unassigned => None,
            Assignment::AssignedTo(idx) => Some(idx),
        }
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        matches!(self, Assignment::AssignedTo(_))
    }
}

impl From<Option<EmployeeIdx>> for Assignment {
    fn from(value: Option<EmployeeIdx>) -> Self {
        match value {
            Some(idx) => Assignment::AssignedTo(idx),
            None => Assignment::Unassigned,
        }
    }
}

/// One duty in one shift, waiting for an employee.
///
/// Duty and shift never change. The assignment changes only through the
/// owning [`Roster`](super::Roster), which refuses pinned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    duty: Duty,
    shift: Shift,
    assignment: Assignment,
    pinned: bool,
}

impl Task {
    /// A task is pinned iff it is created already assigned.
    pub(crate) fn new(id: TaskId, duty: Duty, shift: Shift, assignment: Assignment) -> Self {
        Self {
            id,
            duty,
            shift,
            assignment,
            pinned: assignment.is_assigned(),
        }
    }

    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[inline]
    pub fn duty(&self) -> Duty {
        self.duty
    }

    #[inline]
    pub fn shift(&self) -> Shift {
        self.shift
    }

    #[inline]
    pub fn day_of_week(&self) -> usize {
        self.shift.day_of_week()
    }

    #[inline]
    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    /// Index of the assigned employee, if any.
    #[inline]
    pub fn employee_idx(&self) -> Option<EmployeeIdx> {
        self.assignment.employee()
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub(crate) fn set_assignment(&mut self, assignment: Assignment) {
        self.assignment = assignment;
    }
}

impl PlanningEntity for Task {
    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

impl PlanningId for Task {
    type Id = TaskId;

    fn planning_id(&self) -> TaskId {
        self.id
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.duty, self.shift)
    }
}
