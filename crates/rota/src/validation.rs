//! Construction-time validation.
//!
//! Scoring assumes a structurally valid roster, so every check here runs
//! before a roster exists. Each validator collects *all* problems rather
//! than stopping at the first:
//! - Duplicate employee names or task ids
//! - Task ids that do not increase in creation order
//! - Status, preference and statistics tables of the wrong size
//! - Tasks pre-assigned to an employee who is not on the roster
//! - Shift or duty indices outside the closed sets

use std::collections::HashSet;

use rota_core::{ValidationError, ValidationErrorKind};

use crate::domain::{Duty, Roster, Shift};
use crate::io::{DutyRef, RosterInput, ShiftRef};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn out_of_order(previous: u64, next: u64) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TaskIdOrder,
        format!("Task id #{} follows #{}; ids must increase", next, previous),
    )
}

/// Validates a built roster.
///
/// Tables are fixed-size arrays here, so only identity and references can
/// be wrong.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for employee in roster.employees() {
        if !names.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }
    }

    let mut ids = HashSet::new();
    for task in roster.tasks() {
        if !ids.insert(task.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task id: {}", task.id()),
            ));
        }
    }

    for pair in roster.tasks().windows(2) {
        if pair[1].id() < pair[0].id() {
            errors.push(out_of_order(pair[0].id().0, pair[1].id().0));
        }
    }

    let employee_count = roster.employees().len();
    for task in roster.tasks() {
        if let Some(idx) = task.employee_idx() {
            if idx >= employee_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!(
                        "Task {} is assigned to employee {} but the roster has {}",
                        task.id(),
                        idx,
                        employee_count
                    ),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates incoming roster data before it is converted.
pub fn validate_input(input: &RosterInput) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for employee in &input.employees {
        let name = employee.name.as_str();
        if !names.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee name: {}", name),
            ));
        }

        if employee.statuses.len() != Shift::COUNT {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteTable,
                format!(
                    "Employee '{}' has {} statuses, expected {}",
                    name,
                    employee.statuses.len(),
                    Shift::COUNT
                ),
            ));
        }

        let preferences = &employee.preferences.entries;
        if preferences.len() != Shift::COUNT
            || preferences.iter().any(|row| row.len() != Duty::COUNT)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteTable,
                format!(
                    "Employee '{}' preferences are not a {}x{} table",
                    name,
                    Shift::COUNT,
                    Duty::COUNT
                ),
            ));
        }

        if employee.statistics.task_counts.len() != Duty::COUNT {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteTable,
                format!(
                    "Employee '{}' has {} task counts, expected {}",
                    name,
                    employee.statistics.task_counts.len(),
                    Duty::COUNT
                ),
            ));
        }
    }

    let given_ids: Vec<u64> = input.tasks.iter().filter_map(|task| task.id).collect();
    if !given_ids.is_empty() && given_ids.len() != input.tasks.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TaskIdOrder,
            format!(
                "{} of {} tasks carry an id; give every task an id or none",
                given_ids.len(),
                input.tasks.len()
            ),
        ));
    } else {
        for pair in given_ids.windows(2) {
            if pair[1] < pair[0] {
                errors.push(out_of_order(pair[0], pair[1]));
            }
        }
    }

    let mut ids = HashSet::new();
    for (position, task) in input.tasks.iter().enumerate() {
        let label = match task.id {
            Some(id) => format!("#{}", id),
            None => format!("at position {}", position),
        };

        if let Some(id) = task.id {
            if !ids.insert(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task id: #{}", id),
                ));
            }
        }

        if let ShiftRef::Index(index) = task.shift {
            if Shift::from_index(index).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfRange,
                    format!("Task {} has unknown shift index {}", label, index),
                ));
            }
        }

        if let DutyRef::Index(index) = task.duty {
            if Duty::from_index(index).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfRange,
                    format!("Task {} has unknown duty index {}", label, index),
                ));
            }
        }

        if let Some(name) = &task.employee {
            if !names.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!("Task {} is assigned to unknown employee '{}'", label, name),
                ));
            }
        }
    }

    finish(errors)
}
