//! Rota domain model
//!
//! Shifts, duties, statuses and teams are closed enumerations; per-shift
//! and per-duty tables are fixed-size arrays indexed by them. The only
//! mutable state is each task's [`Assignment`], owned by the [`Roster`].

mod calendar;
mod employee;
mod preferences;
mod roster;
mod statistics;
mod task;


pub use calendar::{Duty, Shift, Status, Team};
pub use employee::{Employee, EmployeeIdx};
pub use preferences::Preferences;
pub use roster::{Roster, RosterBuilder};
pub use statistics::Statistics;
pub use task::{Assignment, Task, TaskId};
