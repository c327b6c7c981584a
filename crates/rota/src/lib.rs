//! Weekly laboratory duty rota scoring.
//!
//! Staff are assigned to diagnostic duties across ten half-day shifts. This
//! crate defines the rota model, validates it, and scores candidate
//! assignments with nine constraints on a hard/medium/soft score. Search
//! itself is left to an injected [`Optimizer`](solver::Optimizer).
//!
//! # Example
//!
//! ```
//! use rota::prelude::*;
//!
//! let mut builder = Roster::builder();
//! let ana = builder.add_employee(Employee::new("Ana", Team::Lymphoid));
//! builder.add_task(Duty::Fish, Shift::MondayAm, Assignment::Unassigned);
//! builder.add_task(Duty::Fish, Shift::MondayPm, Assignment::Unassigned);
//! let mut roster = builder.build().unwrap();
//!
//! assert_eq!(score_roster(&roster), HardMediumSoftScore::of_medium(-2));
//!
//! roster.assign(0, Assignment::AssignedTo(ana)).unwrap();
//! roster.assign(1, Assignment::AssignedTo(ana)).unwrap();
//! assert_eq!(score_roster(&roster), HardMediumSoftScore::of_medium(1));
//! ```

pub mod console;
pub mod constraints;
pub mod domain;
pub mod io;
pub mod solver;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use constraints::{create_constraints, explain_roster, score_roster, RotaConstraints};
pub use domain::{Assignment, Duty, Employee, Roster, RosterBuilder, Shift, Status, Team};
pub use io::{RosterInput, RosterOutput};
pub use solver::{solve, solve_roster, Optimizer, SolveError};

pub use rota_config::{ConfigError, SolverConfig};
pub use rota_core::{HardMediumSoftScore, RotaError, Score};
pub use rota_scoring::{ScoreDirector, ScoreExplanation};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::constraints::{create_constraints, explain_roster, score_roster};
    pub use crate::domain::{
        Assignment, Duty, Employee, EmployeeIdx, Preferences, Roster, RosterBuilder, Shift,
        Statistics, Status, Task, TaskId, Team,
    };
    pub use crate::io::{RosterInput, RosterOutput};
    pub use crate::solver::{solve, solve_roster, Optimizer, SolveError};
    pub use rota_config::SolverConfig;
    pub use rota_core::{
        BasicVariableSolution, HardMediumSoftScore, PlanningSolution, RotaError, Score,
    };
    pub use rota_scoring::{ConstraintSet, ScoreDirector, ScoreExplanation};
}
