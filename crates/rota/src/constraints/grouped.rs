// Constraints over each employee's tasks for the week.
//
// Match indices here are employee indices, not task indices.

use rota_core::{ConstraintRef, HardMediumSoftScore, ImpactType, ScoreLevel};
use rota_scoring::{Constraint, ConstraintJustification, ConstraintMatch};

use super::{constraint_ref, employee_ref};
use crate::domain::{Employee, Roster};

/// Weekly task limit per employee.
const MAX_TASKS_PER_WEEK: usize = 3;

// ============================================================================
// MEDIUM: More than three tasks
// ============================================================================

/// At most three tasks per employee per week.
///
/// An employee over the limit is penalized once, however far over.
pub struct MoreThanThreeTasksConstraint {
    constraint_ref: ConstraintRef,
}

impl MoreThanThreeTasksConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Employee with more than three tasks"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for MoreThanThreeTasksConstraint {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Medium
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Penalty
    }

    fn collect_matches(&self, roster: &Roster, matches: &mut Vec<ConstraintMatch>) {
        for (idx, group) in roster.tasks_by_employee().iter().enumerate() {
            if group.len() > MAX_TASKS_PER_WEEK {
                matches.push(ConstraintMatch::single(idx));
            }
        }
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        let idx = m.indices[0];
        let count = roster.tasks_by_employee()[idx].len();
        let employee = &roster.employees()[idx];
        ConstraintJustification::with_description(
            vec![employee_ref(employee)],
            format!("{} has {} tasks", employee.name, count),
        )
    }
}

// ============================================================================
// SOFT: Fair task sharing
// ============================================================================

/// Spreads tasks using each employee's history.
///
/// For an employee with `n` tasks this week:
/// `rate = 50 + 100 * prior_tasks / prior_shifts`,
/// `penalty = rate * n / working_shifts`, and the soft penalty is
/// `penalty²`. Divisions are integer divisions. Employees with no working
/// shift this week or no prior shift are exempt.
pub struct FairTaskSharingConstraint {
    constraint_ref: ConstraintRef,
}

impl FairTaskSharingConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Tasks shared unfairly between employees"),
        }
    }

    /// Squared load penalty, or `None` for an exempt employee.
    ///
    /// Saturates at `i64::MAX` for absurd histories instead of overflowing.
    pub fn penalty(employee: &Employee, task_count: usize) -> Option<i64> {
        let working = i64::from(employee.working_shift_count());
        let prior_shifts = i64::from(employee.prior_shift_count());
        if working == 0 || prior_shifts == 0 {
            return None;
        }
        let prior_tasks = i64::try_from(employee.prior_task_count()).unwrap_or(i64::MAX);
        let task_count = i64::try_from(task_count).unwrap_or(i64::MAX);
        let rate = 50i64.saturating_add(prior_tasks.saturating_mul(100) / prior_shifts);
        let penalty = rate.saturating_mul(task_count) / working;
        Some(penalty.saturating_mul(penalty))
    }
}

impl Constraint<Roster, HardMediumSoftScore> for FairTaskSharingConstraint {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Soft
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Penalty
    }

    fn collect_matches(&self, roster: &Roster, matches: &mut Vec<ConstraintMatch>) {
        let groups = roster.tasks_by_employee();
        for (idx, (employee, group)) in roster.employees().iter().zip(&groups).enumerate() {
            if group.is_empty() {
                continue;
            }
            if let Some(penalty) = Self::penalty(employee, group.len()) {
                matches.push(ConstraintMatch::weighted(idx, penalty));
            }
        }
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        let employee = &roster.employees()[m.indices[0]];
        ConstraintJustification::with_description(
            vec![employee_ref(employee)],
            format!(
                "{}: {} prior tasks in {} prior shifts (load {:.2}), {} working shifts",
                employee.name,
                employee.prior_task_count(),
                employee.prior_shift_count(),
                employee.statistics.task_load().unwrap_or(0.0),
                employee.working_shift_count()
            ),
        )
    }
}
