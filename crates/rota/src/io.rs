//! JSON boundary types.
//!
//! [`RosterInput`] is what the submission boundary sends: employees with
//! raw status, preference and statistics tables, and tasks that name their
//! pre-assigned employee, if any. Raw tables are checked by
//! [`validate_input`] before they become fixed-size domain arrays.
//! [`RosterOutput`] is the same shape with every assignment filled in and
//! the final score attached.

use std::collections::HashMap;

use rota_core::{HardMediumSoftScore, PlanningSolution, Result, RotaError};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    Assignment, Duty, Employee, Preferences, Roster, Shift, Statistics, Status, TaskId, Team,
};
use crate::validation::validate_input;

/// An unsolved roster as submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterInput {
    pub employees: Vec<EmployeeData>,
    pub tasks: Vec<TaskData>,
}

/// A solved roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterOutput {
    pub employees: Vec<EmployeeData>,
    pub tasks: Vec<TaskData>,
    pub score: Option<HardMediumSoftScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub name: String,
    pub team: Team,
    /// One status per shift.
    pub statuses: Vec<Status>,
    pub preferences: PreferencesData,
    #[serde(default)]
    pub statistics: StatisticsData,
}

/// Shift-by-duty preference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesData {
    pub entries: Vec<Vec<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub shift_count: u32,
    /// One count per duty.
    pub task_counts: Vec<u32>,
}

impl Default for StatisticsData {
    fn default() -> Self {
        Self {
            shift_count: 0,
            task_counts: vec![0; Duty::COUNT],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    /// Present on solved rosters; a resubmitted roster keeps its ids.
    /// Either every task carries one, increasing down the list, or none does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub duty: DutyRef,
    pub shift: ShiftRef,
    /// Name of the assigned employee. A task submitted with one is pinned.
    #[serde(default)]
    pub employee: Option<String>,
}

/// A shift given by name or by sheet column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftRef {
    Name(Shift),
    Index(usize),
}

impl ShiftRef {
    pub fn resolve(self) -> Option<Shift> {
        match self {
            ShiftRef::Name(shift) => Some(shift),
            ShiftRef::Index(index) => Shift::from_index(index),
        }
    }
}

/// A duty given by name or by sheet column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DutyRef {
    Name(Duty),
    Index(usize),
}

impl DutyRef {
    pub fn resolve(self) -> Option<Duty> {
        match self {
            DutyRef::Name(duty) => Some(duty),
            DutyRef::Index(index) => Duty::from_index(index),
        }
    }
}

impl RosterInput {
    /// Validates the input and builds a roster from it.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Validation`] listing every problem found.
    pub fn into_roster(self) -> Result<Roster> {
        if let Err(errors) = validate_input(&self) {
            warn!(
                event = "validation_failed",
                error_count = errors.len(),
                first = ?errors.first(),
            );
            return Err(RotaError::Validation(errors));
        }

        let mut builder = Roster::builder();
        let mut index_by_name = HashMap::new();
        for data in self.employees {
            let name = data.name.clone();
            let idx = builder.add_employee(data.into_employee()?);
            index_by_name.insert(name, idx);
        }

        for (position, data) in self.tasks.into_iter().enumerate() {
            let (duty, shift) = match (data.duty.resolve(), data.shift.resolve()) {
                (Some(duty), Some(shift)) => (duty, shift),
                _ => return Err(malformed(format!("task at position {}", position))),
            };
            let assignment = match &data.employee {
                Some(name) => index_by_name
                    .get(name)
                    .copied()
                    .map(Assignment::AssignedTo)
                    .ok_or_else(|| malformed(format!("employee '{}'", name)))?,
                None => Assignment::Unassigned,
            };
            match data.id {
                Some(id) => builder.add_task_with_id(TaskId(id), duty, shift, assignment),
                None => builder.add_task(duty, shift, assignment),
            };
        }

        builder.build()
    }
}

fn malformed(what: String) -> RotaError {
    RotaError::DomainModel(format!("{} did not survive validation", what))
}

impl EmployeeData {
    fn into_employee(self) -> Result<Employee> {
        let statuses: [Status; Shift::COUNT] = self
            .statuses
            .as_slice()
            .try_into()
            .map_err(|_| malformed(format!("statuses of '{}'", self.name)))?;

        let mut entries = [[false; Duty::COUNT]; Shift::COUNT];
        for (row, data) in entries.iter_mut().zip(&self.preferences.entries) {
            *row = data
                .as_slice()
                .try_into()
                .map_err(|_| malformed(format!("preferences of '{}'", self.name)))?;
        }

        let task_counts: [u32; Duty::COUNT] = self
            .statistics
            .task_counts
            .as_slice()
            .try_into()
            .map_err(|_| malformed(format!("statistics of '{}'", self.name)))?;

        Ok(Employee::new(self.name, self.team)
            .with_statuses(statuses)
            .with_preferences(Preferences::new(entries))
            .with_statistics(Statistics::new(self.statistics.shift_count, task_counts)))
    }

    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            team: employee.team,
            statuses: employee.statuses.to_vec(),
            preferences: PreferencesData {
                entries: employee
                    .preferences
                    .entries()
                    .iter()
                    .map(|row| row.to_vec())
                    .collect(),
            },
            statistics: StatisticsData {
                shift_count: employee.statistics.shift_count,
                task_counts: employee.statistics.task_counts.to_vec(),
            },
        }
    }
}

impl RosterOutput {
    /// Describes a roster with assignments by employee name.
    pub fn from_roster(roster: &Roster) -> Self {
        let tasks = roster
            .tasks()
            .iter()
            .map(|task| TaskData {
                id: Some(task.id().0),
                duty: DutyRef::Name(task.duty()),
                shift: ShiftRef::Name(task.shift()),
                employee: roster.assignee(task).map(|e| e.name.clone()),
            })
            .collect();

        Self {
            employees: roster
                .employees()
                .iter()
                .map(EmployeeData::from_employee)
                .collect(),
            tasks,
            score: roster.score(),
        }
    }

    /// Returns true if the roster has a score with no hard violations.
    pub fn is_feasible(&self) -> bool {
        self.score.is_some_and(|score| score.hard() >= 0)
    }
}

impl From<RosterOutput> for RosterInput {
    fn from(output: RosterOutput) -> Self {
        Self {
            employees: output.employees,
            tasks: output.tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use rota_core::ValidationErrorKind;
    use serde_json::json;

    use super::*;

    fn ana_json() -> serde_json::Value {
        json!({
            "name": "Ana",
            "team": "AML_MDS",
            "statuses": ["AVAILABLE", "UNAVAILABLE", "WORKING_FROM_HOME", "ANNUAL_LEAVE",
                         "DOES_NOT_WORK", "AVAILABLE", "AVAILABLE", "AVAILABLE",
                         "AVAILABLE", "AVAILABLE"],
            "preferences": { "entries": vec![vec![true; 4]; 10] },
            "statistics": { "shiftCount": 4, "taskCounts": [1, 0, 1, 0] }
        })
    }

    #[test]
    fn test_parse_and_convert() {
        let input: RosterInput = serde_json::from_value(json!({
            "employees": [ana_json()],
            "tasks": [
                { "duty": "FISH", "shift": "MONDAY_AM" },
                { "duty": "LATE_DS", "shift": "FRIDAY_PM", "employee": "Ana" },
                { "duty": 3, "shift": 2 }
            ]
        }))
        .unwrap();

        let roster = input.into_roster().unwrap();
        let ana = &roster.employees()[0];
        assert_eq!(ana.team, Team::AmlMds);
        assert_eq!(ana.working_shift_count(), 8);
        assert_eq!(ana.prior_task_count(), 2);

        let tasks = roster.tasks();
        assert_eq!(tasks[0].id(), TaskId(1));
        assert!(!tasks[0].is_pinned());
        assert_eq!(tasks[1].employee_idx(), Some(0));
        assert!(tasks[1].is_pinned());
        assert_eq!(tasks[2].duty(), Duty::Ss);
        assert_eq!(tasks[2].shift(), Shift::TuesdayAm);
    }

    #[test]
    fn test_missing_statistics_default_to_zero() {
        let mut ana = ana_json();
        ana.as_object_mut().unwrap().remove("statistics");
        let input: RosterInput =
            serde_json::from_value(json!({ "employees": [ana], "tasks": [] })).unwrap();
        let roster = input.into_roster().unwrap();
        assert_eq!(roster.employees()[0].prior_shift_count(), 0);
    }

    #[test]
    fn test_unknown_employee_is_validation_error() {
        let input: RosterInput = serde_json::from_value(json!({
            "employees": [ana_json()],
            "tasks": [{ "duty": "DS", "shift": "MONDAY_PM", "employee": "Zed" }]
        }))
        .unwrap();

        match input.into_roster() {
            Err(RotaError::Validation(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::UnknownEmployee);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_shift_name_is_rejected_by_serde() {
        let result: std::result::Result<TaskData, _> =
            serde_json::from_value(json!({ "duty": "DS", "shift": "SATURDAY_AM" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_output_uses_names_and_score() {
        let input: RosterInput = serde_json::from_value(json!({
            "employees": [ana_json()],
            "tasks": [
                { "duty": "FISH", "shift": "MONDAY_AM", "employee": "Ana" },
                { "duty": "DS", "shift": "MONDAY_PM" }
            ]
        }))
        .unwrap();
        let mut roster = input.into_roster().unwrap();
        roster.set_score(Some(HardMediumSoftScore::of(0, -1, -1600)));

        let output = RosterOutput::from_roster(&roster);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["tasks"][0]["employee"], "Ana");
        assert_eq!(json["tasks"][0]["id"], 1);
        assert_eq!(json["tasks"][0]["shift"], "MONDAY_AM");
        assert!(json["tasks"][1]["employee"].is_null());
        assert_eq!(json["score"], json!({ "hard": 0, "medium": -1, "soft": -1600 }));
        assert_eq!(json["employees"][0]["statistics"]["taskCounts"], json!([1, 0, 1, 0]));
        assert!(output.is_feasible());
    }

    #[test]
    fn test_task_ids_must_be_complete_and_increasing() {
        for tasks in [
            json!([{ "duty": "DS", "shift": "MONDAY_PM" },
                   { "id": 1, "duty": "DS", "shift": "MONDAY_AM" }]),
            json!([{ "id": 5, "duty": "DS", "shift": "MONDAY_PM" },
                   { "id": 2, "duty": "DS", "shift": "MONDAY_AM" }]),
        ] {
            let input: RosterInput =
                serde_json::from_value(json!({ "employees": [ana_json()], "tasks": tasks }))
                    .unwrap();
            match input.into_roster() {
                Err(RotaError::Validation(errors)) => {
                    let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
                    assert_eq!(kinds, vec![ValidationErrorKind::TaskIdOrder]);
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resubmitted_output_keeps_ids() {
        let mut builder = Roster::builder();
        let ana = builder.add_employee(Employee::new("Ana", Team::Lymphoid));
        let roster = builder
            .task(Duty::Fish, Shift::MondayAm)
            .assigned_task(Duty::Ds, Shift::MondayPm, ana)
            .build()
            .unwrap();

        let again = RosterInput::from(RosterOutput::from_roster(&roster))
            .into_roster()
            .unwrap();
        let ids: Vec<_> = again.tasks().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
        assert_eq!(again.employees()[0], roster.employees()[0]);
        assert_eq!(again.employees()[0].preferences, roster.employees()[0].preferences);
    }
}
