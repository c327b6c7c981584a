//! Roster fixtures for unit tests.

use crate::domain::{
    Assignment, Duty, Employee, EmployeeIdx, Roster, RosterBuilder, Shift, Statistics, Team,
};

/// An employee available all week for every duty, with no history.
pub fn employee(name: &str) -> Employee {
    Employee::new(name, Team::Lymphoid)
}

/// An employee with history, for fairness scenarios.
pub fn employee_with_history(name: &str, prior_shifts: u32, task_counts: [u32; 4]) -> Employee {
    employee(name).with_statistics(Statistics::new(prior_shifts, task_counts))
}

/// A builder holding Ana (index 0) and Ben (index 1).
pub fn two_employee_builder() -> RosterBuilder {
    Roster::builder()
        .employee(employee("Ana"))
        .employee(employee("Ben"))
}

/// Builds a roster whose tasks are created unassigned, then assigned as
/// given, so none of them is pinned.
pub fn roster_with(
    employees: Vec<Employee>,
    tasks: &[(Duty, Shift, Option<EmployeeIdx>)],
) -> Roster {
    let mut builder = Roster::builder();
    for e in employees {
        builder.add_employee(e);
    }
    for &(duty, shift, _) in tasks {
        builder.add_task(duty, shift, Assignment::Unassigned);
    }
    let mut roster = builder.build().unwrap();
    for (i, &(_, _, employee)) in tasks.iter().enumerate() {
        roster.assign(i, Assignment::from(employee)).unwrap();
    }
    roster
}
