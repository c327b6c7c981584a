// Constraints that look at one task at a time.

use rota_core::{ConstraintRef, HardMediumSoftScore, ImpactType, ScoreLevel};
use rota_scoring::{Constraint, ConstraintJustification, ConstraintMatch};

use super::{constraint_ref, task_ref};
use crate::domain::Roster;

// ============================================================================
// HARD: Employee not available
// ============================================================================

/// An assigned employee must be available in the shift and willing to do
/// the duty.
pub struct EmployeeNotAvailableConstraint {
    constraint_ref: ConstraintRef,
}

impl EmployeeNotAvailableConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Employee not available for shift/duty"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for EmployeeNotAvailableConstraint {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Hard
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Penalty
    }

    fn collect_matches(&self, roster: &Roster, matches: &mut Vec<ConstraintMatch>) {
        for (i, task) in roster.tasks().iter().enumerate() {
            if let Some(employee) = roster.assignee(task) {
                if !employee.can_perform(task.duty(), task.shift()) {
                    matches.push(ConstraintMatch::single(i));
                }
            }
        }
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        let task = &roster.tasks()[m.indices[0]];
        let reason = match roster.assignee(task) {
            Some(employee) => format!(
                "{} is {:?} for {}",
                employee.name,
                employee.status(task.shift()),
                task
            ),
            None => task.to_string(),
        };
        ConstraintJustification::with_description(vec![task_ref(roster, m.indices[0])], reason)
    }
}

// ============================================================================
// MEDIUM: Unassigned task
// ============================================================================

/// Every task should have an employee.
pub struct UnassignedTaskConstraint {
    constraint_ref: ConstraintRef,
}

impl UnassignedTaskConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Unassigned task"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for UnassignedTaskConstraint {
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
        matches.extend(
            roster
                .tasks()
                .iter()
                .enumerate()
                .filter(|(_, task)| !task.assignment().is_assigned())
                .map(|(i, _)| ConstraintMatch::single(i)),
        );
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        ConstraintJustification::new(vec![task_ref(roster, m.indices[0])])
    }
}

// ============================================================================
// MEDIUM: Use of principals
// ============================================================================

/// Principals are kept off normal duties.
pub struct UseOfPrincipalsConstraint {
    constraint_ref: ConstraintRef,
}

impl UseOfPrincipalsConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Use of principals"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for UseOfPrincipalsConstraint {
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
        for (i, task) in roster.tasks().iter().enumerate() {
            if roster.assignee(task).is_some_and(|e| e.is_principal()) {
                matches.push(ConstraintMatch::single(i));
            }
        }
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        ConstraintJustification::new(vec![task_ref(roster, m.indices[0])])
    }
}
