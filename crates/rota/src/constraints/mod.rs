//! The nine rota constraints.
//!
//! Each constraint is a stateless struct implementing
//! `Constraint<Roster, HardMediumSoftScore>`. Together they form the
//! [`RotaConstraints`] tuple, evaluated without virtual dispatch.

#![allow(clippy::new_without_default)]

mod grouped;
mod pairwise;
mod per_task;


use rota_core::{ConstraintRef, HardMediumSoftScore};
use rota_scoring::{ConstraintSet, EntityRef, ScoreExplanation};

use crate::domain::{Employee, Roster};

pub use grouped::{FairTaskSharingConstraint, MoreThanThreeTasksConstraint};
pub use pairwise::{
    FishSameDayConstraint, MoreThanOneDsTaskConstraint, SimultaneousTasksConstraint,
    TwoTasksSameDayConstraint,
};
pub use per_task::{
    EmployeeNotAvailableConstraint, UnassignedTaskConstraint, UseOfPrincipalsConstraint,
};

/// Package every rota constraint is registered under.
pub const CONSTRAINT_PACKAGE: &str = "rota";

/// All constraints as a typed tuple.
///
/// HARD constraints:
/// 1. Simultaneous tasks - One employee cannot do two tasks in one shift
/// 2. Employee not available - Employee must be in and willing
///
/// MEDIUM constraints:
/// 3. Unassigned task - Every task should be staffed
/// 4. Two tasks on same day - At most one task per day, FISH pairs exempt
/// 5. FISH tasks on same day - Reward a full day of FISH
/// 6. More than three tasks - At most three tasks per week
/// 7. More than one (Late)DS task - At most one DS-family task per week
/// 8. Use of principals - Principals stay off normal duties
///
/// SOFT constraints:
/// 9. Fair task sharing - Spread load using historical statistics
pub type RotaConstraints = (
    SimultaneousTasksConstraint,
    EmployeeNotAvailableConstraint,
    UnassignedTaskConstraint,
    TwoTasksSameDayConstraint,
    FishSameDayConstraint,
    MoreThanThreeTasksConstraint,
    MoreThanOneDsTaskConstraint,
    UseOfPrincipalsConstraint,
    FairTaskSharingConstraint,
);

/// Creates all constraints for the rota problem.
pub fn create_constraints() -> RotaConstraints {
    (
        SimultaneousTasksConstraint::new(),
        EmployeeNotAvailableConstraint::new(),
        UnassignedTaskConstraint::new(),
        TwoTasksSameDayConstraint::new(),
        FishSameDayConstraint::new(),
        MoreThanThreeTasksConstraint::new(),
        MoreThanOneDsTaskConstraint::new(),
        UseOfPrincipalsConstraint::new(),
        FairTaskSharingConstraint::new(),
    )
}

/// Scores a roster against every constraint.
pub fn score_roster(roster: &Roster) -> HardMediumSoftScore {
    create_constraints().evaluate_all(roster)
}

/// Explains a roster's score constraint by constraint.
pub fn explain_roster(roster: &Roster) -> ScoreExplanation<HardMediumSoftScore> {
    create_constraints().explain(roster)
}

fn constraint_ref(name: &str) -> ConstraintRef {
    ConstraintRef::new(CONSTRAINT_PACKAGE, name)
}

fn task_ref(roster: &Roster, task_index: usize) -> EntityRef {
    let task = &roster.tasks()[task_index];
    let display = match roster.assignee(task) {
        Some(employee) => format!("{} ({})", task, employee.name),
        None => task.to_string(),
    };
    EntityRef::with_display("Task", display)
}

fn employee_ref(employee: &Employee) -> EntityRef {
    EntityRef::with_display("Employee", employee.name.clone())
}
