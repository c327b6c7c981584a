use rota_core::{
    BasicVariableSolution, FieldValueRangeProvider, HardMediumSoftScore, PlanningSolution,
    Result, RotaError, ValueRangeProvider,
};
use tracing::warn;

use super::calendar::{Duty, Shift};
use super::employee::{Employee, EmployeeIdx};
use super::task::{Assignment, Task, TaskId};
use crate::validation;

/// A candidate rota: every task with its current assignment, plus the
/// employees tasks may be assigned to.
///
/// This is the unit the optimizer mutates and the constraints score. Build
/// one with [`RosterBuilder`] so it is validated before any scoring runs.
#[derive(Debug, Clone)]
pub struct Roster {
    tasks: Vec<Task>,
    employees: Vec<Employee>,
    score: Option<HardMediumSoftScore>,
}

impl Roster {
    pub fn builder() -> RosterBuilder {
        RosterBuilder::new()
    }

    #[inline]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[inline]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[inline]
    pub fn employee(&self, idx: EmployeeIdx) -> Option<&Employee> {
        self.employees.get(idx)
    }

    /// The employee a task is assigned to, if any.
    #[inline]
    pub fn assignee(&self, task: &Task) -> Option<&Employee> {
        task.employee_idx().and_then(|idx| self.employees.get(idx))
    }

    /// Position of the task with `id`.
    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Changes a task's assignment, refusing pinned tasks and unknown
    /// employees.
    pub fn assign(&mut self, task_index: usize, assignment: Assignment) -> Result<()> {
        self.change_value(task_index, assignment.employee())
    }

    /// Clears every movable assignment.
    pub fn unassign_all(&mut self) {
        for task in self.tasks.iter_mut().filter(|task| !task.is_pinned()) {
            task.set_assignment(Assignment::Unassigned);
        }
        self.score = None;
    }

    pub fn pinned_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_pinned()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.assignment().is_assigned())
            .count()
    }

    /// Employees whose preferences allow at least one duty.
    pub fn usable_employee_count(&self) -> usize {
        self.employees.iter().filter(|e| e.can_do_tasks()).count()
    }

    /// Task indices grouped by assigned employee, in task order.
    pub fn tasks_by_employee(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.employees.len()];
        for (i, task) in self.tasks.iter().enumerate() {
            if let Some(group) = task.employee_idx().and_then(|idx| groups.get_mut(idx)) {
                group.push(i);
            }
        }
        groups
    }
}

impl PlanningSolution for Roster {
    type Score = HardMediumSoftScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

impl BasicVariableSolution for Roster {
    type Value = EmployeeIdx;

    fn entity_count(&self) -> usize {
        self.tasks.len()
    }

    fn is_pinned(&self, entity_index: usize) -> bool {
        self.tasks[entity_index].is_pinned()
    }

    fn value(&self, entity_index: usize) -> Option<EmployeeIdx> {
        self.tasks[entity_index].employee_idx()
    }

    fn set_value(&mut self, entity_index: usize, value: Option<EmployeeIdx>) {
        self.tasks[entity_index].set_assignment(Assignment::from(value));
    }

    fn value_range(&self) -> Vec<EmployeeIdx> {
        FieldValueRangeProvider::new(roster_employees).get_values(self)
    }

    fn is_legal_value(&self, value: &EmployeeIdx) -> bool {
        *value < FieldValueRangeProvider::new(roster_employees).value_count(self)
    }
}

// Every employee index is a legal value for every task.
fn roster_employees(roster: &Roster) -> &[Employee] {
    &roster.employees
}

/// Builds a validated [`Roster`].
///
/// Task ids are allocated from 1 in the order tasks are added. A task added
/// with an employee is pinned.
///
/// # Example
///
/// ```
/// use rota::domain::{Duty, Employee, Roster, Shift, Team};
///
/// let mut builder = Roster::builder();
/// let ana = builder.add_employee(Employee::new("Ana", Team::Lymphoid));
/// let roster = builder
///     .task(Duty::Fish, Shift::MondayAm)
///     .assigned_task(Duty::Ds, Shift::MondayPm, ana)
///     .build()
///     .unwrap();
///
/// assert_eq!(roster.tasks()[0].id().0, 1);
/// assert!(roster.tasks()[1].is_pinned());
/// ```
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    next_id: u64,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an employee and returns its index.
    pub fn add_employee(&mut self, employee: Employee) -> EmployeeIdx {
        self.employees.push(employee);
        self.employees.len() - 1
    }

    pub fn employee(mut self, employee: Employee) -> Self {
        self.add_employee(employee);
        self
    }

    /// Adds a task with the next id. It is pinned iff `assignment` is
    /// assigned.
    pub fn add_task(&mut self, duty: Duty, shift: Shift, assignment: Assignment) -> TaskId {
        let id = TaskId(self.next_id);
        self.push_task(id, duty, shift, assignment);
        id
    }

    /// Adds a task that keeps a previously issued id.
    ///
    /// `id` must exceed every id already in the builder, or
    /// [`build`](Self::build) rejects the roster. Later tasks get ids
    /// above it.
    pub fn add_task_with_id(
        &mut self,
        id: TaskId,
        duty: Duty,
        shift: Shift,
        assignment: Assignment,
    ) -> TaskId {
        self.push_task(id, duty, shift, assignment);
        id
    }

    /// Adds an unassigned task.
    pub fn task(mut self, duty: Duty, shift: Shift) -> Self {
        self.add_task(duty, shift, Assignment::Unassigned);
        self
    }

    /// Adds a task pinned to `employee`.
    pub fn assigned_task(mut self, duty: Duty, shift: Shift, employee: EmployeeIdx) -> Self {
        self.add_task(duty, shift, Assignment::AssignedTo(employee));
        self
    }

    fn push_task(&mut self, id: TaskId, duty: Duty, shift: Shift, assignment: Assignment) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.tasks.push(Task::new(id, duty, shift, assignment));
    }

    /// Validates and returns the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Validation`] listing every problem found.
    pub fn build(self) -> Result<Roster> {
        let roster = Roster {
            tasks: self.tasks,
            employees: self.employees,
            score: None,
        };
        if let Err(errors) = validation::validate_roster(&roster) {
            warn!(
                event = "validation_failed",
                error_count = errors.len(),
                first = ?errors.first(),
            );
            return Err(RotaError::Validation(errors));
        }
        Ok(roster)
    }
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
