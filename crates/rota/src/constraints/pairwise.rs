// Constraints over pairs of tasks that share an employee.
//
// Each unordered pair is visited once, as (lower id, higher id). List
// order never affects which pairs match.

use rota_core::{ConstraintRef, HardMediumSoftScore, ImpactType, ScoreLevel};
use rota_scoring::{Constraint, ConstraintJustification, ConstraintMatch};

use super::{constraint_ref, task_ref};
use crate::domain::{Duty, Roster, Task};

/// Pushes a pair match for every same-employee pair accepted by `matches_pair`.
fn collect_pairs(
    roster: &Roster,
    matches: &mut Vec<ConstraintMatch>,
    matches_pair: impl Fn(&Task, &Task) -> bool,
) {
    let tasks = roster.tasks();
    for mut group in roster.tasks_by_employee() {
        group.sort_by_key(|&i| tasks[i].id());
        for (a, &first) in group.iter().enumerate() {
            for &second in &group[a + 1..] {
                let (t1, t2) = (&tasks[first], &tasks[second]);
                if t1.id() < t2.id() && matches_pair(t1, t2) {
                    matches.push(ConstraintMatch::pair(first, second));
                }
            }
        }
    }
}

fn justify_pair(roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
    ConstraintJustification::new(m.indices.iter().map(|&i| task_ref(roster, i)).collect())
}

// ============================================================================
// HARD: Simultaneous tasks
// ============================================================================

/// One employee cannot do two tasks in the same shift.
pub struct SimultaneousTasksConstraint {
    constraint_ref: ConstraintRef,
}

impl SimultaneousTasksConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Employee assigned to multiple simultaneous tasks"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for SimultaneousTasksConstraint {
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
        collect_pairs(roster, matches, |t1, t2| t1.shift() == t2.shift());
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        justify_pair(roster, m)
    }
}

// ============================================================================
// MEDIUM: Two tasks on same day
// ============================================================================

/// At most one task per employee per day, unless both are FISH.
pub struct TwoTasksSameDayConstraint {
    constraint_ref: ConstraintRef,
}

impl TwoTasksSameDayConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Two tasks on same day (unless both FISH)"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for TwoTasksSameDayConstraint {
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
        collect_pairs(roster, matches, |t1, t2| {
            t1.day_of_week() == t2.day_of_week()
                && !(t1.duty() == Duty::Fish && t2.duty() == Duty::Fish)
        });
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        justify_pair(roster, m)
    }
}

// ============================================================================
// MEDIUM (reward): FISH tasks on same day
// ============================================================================

/// Two FISH tasks on one day for one employee make a wanted full day.
pub struct FishSameDayConstraint {
    constraint_ref: ConstraintRef,
}

impl FishSameDayConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("FISH tasks on same day"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for FishSameDayConstraint {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Medium
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Reward
    }

    fn collect_matches(&self, roster: &Roster, matches: &mut Vec<ConstraintMatch>) {
        collect_pairs(roster, matches, |t1, t2| {
            t1.day_of_week() == t2.day_of_week()
                && t1.duty() == Duty::Fish
                && t2.duty() == Duty::Fish
        });
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        justify_pair(roster, m)
    }
}

// ============================================================================
// MEDIUM: More than one (Late)DS task
// ============================================================================

/// At most one DS or LATE_DS task per employee per week.
pub struct MoreThanOneDsTaskConstraint {
    constraint_ref: ConstraintRef,
}

impl MoreThanOneDsTaskConstraint {
    pub fn new() -> Self {
        Self {
            constraint_ref: constraint_ref("Employee with more than one (Late)DS task"),
        }
    }
}

impl Constraint<Roster, HardMediumSoftScore> for MoreThanOneDsTaskConstraint {
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
        collect_pairs(roster, matches, |t1, t2| {
            t1.duty().is_ds_family() && t2.duty().is_ds_family()
        });
    }

    fn justify(&self, roster: &Roster, m: &ConstraintMatch) -> ConstraintJustification {
        justify_pair(roster, m)
    }
}
