//! The solve boundary.
//!
//! Search is not done here. An [`Optimizer`] is injected, receives a score
//! director over the validated roster, and changes assignments through it.
//! The director refuses changes to pinned tasks, so whatever the optimizer
//! does, pre-assigned tasks keep their employee.

use std::fmt::Display;
use std::time::Instant;

use rota_config::{ConfigError, SolverConfig};
use rota_core::{PlanningSolution, RotaError, Score, ValidationError};
use rota_scoring::{ConstraintSet, ScoreDirector, ScoreDirectorFactory};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::constraints::{create_constraints, RotaConstraints};
use crate::domain::Roster;
use crate::io::{RosterInput, RosterOutput};

/// Errors surfaced at the solve boundary.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The submitted roster failed validation; nothing was scored.
    #[error("Invalid roster: {}", join_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The optimizer failed.
    #[error("Solving failed: {0}")]
    SolvingFailed(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(RotaError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<RotaError> for SolveError {
    fn from(err: RotaError) -> Self {
        match err {
            RotaError::Validation(errors) => SolveError::InvalidInput(errors),
            RotaError::SolvingFailed(message) => SolveError::SolvingFailed(message),
            other => SolveError::Domain(other),
        }
    }
}

/// An external search strategy.
///
/// The optimizer may call [`ScoreDirector::change_value`] and
/// [`ScoreDirector::calculate_score`] as often and in whatever order it
/// likes. Termination settings in `config` are for it to honour.
pub trait Optimizer {
    type Error: Display;

    fn optimize(
        &mut self,
        director: &mut dyn ScoreDirector<Roster>,
        config: &SolverConfig,
    ) -> Result<(), Self::Error>;
}

impl<F, E> Optimizer for F
where
    F: FnMut(&mut dyn ScoreDirector<Roster>, &SolverConfig) -> Result<(), E>,
    E: Display,
{
    type Error = E;

    fn optimize(
        &mut self,
        director: &mut dyn ScoreDirector<Roster>,
        config: &SolverConfig,
    ) -> Result<(), E> {
        self(director, config)
    }
}

/// Validates `input`, lets `optimizer` improve it, and returns the solved
/// roster with its final score.
///
/// # Errors
///
/// [`SolveError::InvalidInput`] if the roster fails validation,
/// [`SolveError::Config`] if the configuration is invalid, and
/// [`SolveError::SolvingFailed`] if the optimizer reports an error.
pub fn solve<O>(
    input: RosterInput,
    optimizer: &mut O,
    config: &SolverConfig,
) -> Result<RosterOutput, SolveError>
where
    O: Optimizer + ?Sized,
{
    config.validate()?;
    let roster = input.into_roster()?;
    let solved = solve_roster(roster, optimizer, config)?;
    Ok(RosterOutput::from_roster(&solved))
}

/// Runs `optimizer` over an already built roster.
pub fn solve_roster<O>(
    roster: Roster,
    optimizer: &mut O,
    config: &SolverConfig,
) -> Result<Roster, SolveError>
where
    O: Optimizer + ?Sized,
{
    let factory: ScoreDirectorFactory<Roster, RotaConstraints> =
        ScoreDirectorFactory::new(create_constraints())
            .with_parallel_evaluation(config.parallel_evaluation());
    let termination = config.termination.clone().unwrap_or_default();
    let start = Instant::now();

    info!(
        event = "solve_start",
        entity_count = roster.tasks().len(),
        value_count = roster.employees().len(),
        pinned_count = roster.pinned_count(),
        usable_employee_count = roster.usable_employee_count(),
        constraint_count = factory.constraints().constraint_count(),
        time_limit = ?termination.time_limit(),
        unimproved_time_limit = ?termination.unimproved_time_limit(),
    );

    let mut director = factory.build_score_director(roster);
    let initial = director.calculate_score();
    debug!(event = "initial_score", score = %initial);

    if let Err(err) = optimizer.optimize(&mut director, config) {
        let message = err.to_string();
        error!(event = "solve_failed", error = %message);
        return Err(SolveError::SolvingFailed(message));
    }

    let score = director.calculate_score();
    if config.score_director.constraint_match_enabled {
        info!(
            event = "score_explanation",
            summary = %director.explain().summary(),
        );
    }

    let solved = director.into_solution();
    info!(
        event = "solve_end",
        score = %score,
        feasible = score.is_feasible(),
        unassigned_count = solved.unassigned_count(),
        duration_ms = start.elapsed().as_millis() as u64,
    );
    debug_assert_eq!(solved.score(), Some(score));
    Ok(solved)
}

#[cfg(test)]
mod tests {
    use rota_core::{BasicVariableSolution, HardMediumSoftScore, ValidationErrorKind};

    use super::*;
    use crate::domain::{Assignment, Duty, Shift};
    use crate::test_utils::two_employee_builder;

    fn first_fit(
        director: &mut dyn ScoreDirector<Roster>,
        _config: &SolverConfig,
    ) -> Result<(), RotaError> {
        for entity in director.movable_entities() {
            let mut best = (director.calculate_score(), None);
            for value in director.value_range() {
                director.change_value(entity, Some(value))?;
                let score = director.calculate_score();
                if score > best.0 {
                    best = (score, Some(value));
                }
            }
            director.change_value(entity, best.1)?;
        }
        Ok(())
    }

    #[test]
    fn test_solve_roster_assigns_movable_tasks() {
        let roster = two_employee_builder()
            .task(Duty::Fish, Shift::MondayAm)
            .task(Duty::Ds, Shift::MondayAm)
            .build()
            .unwrap();

        let solved = solve_roster(roster, &mut first_fit, &SolverConfig::default()).unwrap();
        assert_eq!(solved.unassigned_count(), 0);
        assert!(solved.score().unwrap().is_feasible());
        assert_ne!(solved.tasks()[0].employee_idx(), solved.tasks()[1].employee_idx());
    }

    #[test]
    fn test_pinned_tasks_survive_optimizer() {
        let roster = two_employee_builder()
            .assigned_task(Duty::Fish, Shift::MondayAm, 1)
            .build()
            .unwrap();

        let mut meddler = |director: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| {
            let refused = director.change_value(0, Some(0));
            assert!(matches!(refused, Err(RotaError::PinnedEntity { entity_index: 0 })));
            Ok::<(), RotaError>(())
        };
        let solved = solve_roster(roster, &mut meddler, &SolverConfig::default()).unwrap();
        assert_eq!(solved.tasks()[0].employee_idx(), Some(1));
    }

    #[test]
    fn test_director_errors_become_solving_failed() {
        let roster = two_employee_builder()
            .assigned_task(Duty::Fish, Shift::MondayAm, 1)
            .build()
            .unwrap();

        let mut meddler = |director: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| {
            director.change_value(0, None)
        };
        match solve_roster(roster, &mut meddler, &SolverConfig::default()) {
            Err(SolveError::SolvingFailed(message)) => assert!(message.contains("pinned")),
            other => panic!("expected SolvingFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_optimizer_error_is_solving_failed() {
        let roster = two_employee_builder().build().unwrap();
        let mut failing =
            |_: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| Err::<(), _>("interrupted");

        match solve_roster(roster, &mut failing, &SolverConfig::default()) {
            Err(SolveError::SolvingFailed(message)) => assert_eq!(message, "interrupted"),
            other => panic!("expected SolvingFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_solve_rejects_invalid_input() {
        let roster = two_employee_builder().build().unwrap();
        let mut input = RosterInput::from(RosterOutput::from_roster(&roster));
        input.employees[0].statuses.truncate(3);

        let mut untouched =
            |_: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| Ok::<(), RotaError>(());
        match solve(input, &mut untouched, &SolverConfig::default()) {
            Err(SolveError::InvalidInput(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::IncompleteTable);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_solve_keeps_score_on_output() {
        let mut builder = two_employee_builder();
        builder.add_task(Duty::Ss, Shift::FridayPm, Assignment::Unassigned);
        let input = RosterInput::from(RosterOutput::from_roster(&builder.build().unwrap()));

        let mut untouched =
            |_: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| Ok::<(), RotaError>(());
        let config = SolverConfig::default().with_parallel_evaluation(true);
        let output = solve(input, &mut untouched, &config).unwrap();
        assert_eq!(output.score, Some(HardMediumSoftScore::of_medium(-1)));
        assert!(output.tasks[0].employee.is_none());
    }

    #[test]
    fn test_director_sees_whole_roster() {
        let roster = two_employee_builder()
            .task(Duty::Fish, Shift::MondayAm)
            .assigned_task(Duty::Ds, Shift::TuesdayAm, 0)
            .build()
            .unwrap();

        let mut inspect = |director: &mut dyn ScoreDirector<Roster>, _: &SolverConfig| {
            assert_eq!(director.entity_count(), 2);
            assert_eq!(director.movable_entities(), vec![0]);
            assert_eq!(director.value_range(), vec![0, 1]);
            assert_eq!(director.working_solution().entity_count(), 2);
            assert_eq!(director.constraint_count(), 9);
            Ok::<(), RotaError>(())
        };
        solve_roster(roster, &mut inspect, &SolverConfig::default()).unwrap();
    }

    #[test]
    fn test_parallel_solve_with_termination_matches_sequential() {
        let build = || {
            two_employee_builder()
                .task(Duty::Fish, Shift::MondayAm)
                .task(Duty::Fish, Shift::MondayPm)
                .task(Duty::Ds, Shift::MondayAm)
                .build()
                .unwrap()
        };
        let parallel = SolverConfig::default()
            .with_parallel_evaluation(true)
            .with_termination_seconds(5);

        let sequential = solve_roster(build(), &mut first_fit, &SolverConfig::default()).unwrap();
        let solved = solve_roster(build(), &mut first_fit, &parallel).unwrap();
        assert_eq!(solved.score(), sequential.score());
        assert_eq!(solved.unassigned_count(), 0);
    }
}
