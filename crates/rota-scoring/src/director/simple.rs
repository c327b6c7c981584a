//! Simple score director with full recalculation.

use std::marker::PhantomData;

use tracing::trace;

use rota_core::domain::BasicVariableSolution;
use rota_core::Result;

use crate::api::{ConstraintSet, ScoreExplanation};

use super::traits::ScoreDirector;

/// A score director that recalculates the full score after each change.
///
/// The constraint set is stored as a concrete generic type parameter. The
/// score is cached and only recalculated after the working solution has
/// actually changed.
pub struct SimpleScoreDirector<S: BasicVariableSolution, C> {
    working_solution: S,
    constraints: C,
    parallel_evaluation: bool,
    score_dirty: bool,
    cached_score: Option<S::Score>,
    calculation_count: u64,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, C> SimpleScoreDirector<S, C>
where
    S: BasicVariableSolution,
    C: ConstraintSet<S, S::Score>,
{
    /// Creates a new SimpleScoreDirector.
    pub fn new(solution: S, constraints: C) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            constraints,
            parallel_evaluation: false,
            score_dirty: true,
            cached_score: None,
            calculation_count: 0,
            _phantom: PhantomData,
        }
    }

    /// Evaluates constraints on the rayon pool when `enabled`.
    pub fn with_parallel_evaluation(mut self, enabled: bool) -> Self {
        self.parallel_evaluation = enabled;
        self
    }

    /// Returns the constraint set.
    pub fn constraints(&self) -> &C {
        &self.constraints
    }

    /// Consumes the director and returns the scored working solution.
    pub fn into_solution(mut self) -> S {
        let score = self.calculate_score();
        self.working_solution.set_score(Some(score));
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl<S, C> ScoreDirector<S> for SimpleScoreDirector<S, C>
where
    S: BasicVariableSolution,
    C: ConstraintSet<S, S::Score>,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = if self.parallel_evaluation {
            self.constraints.evaluate_all_parallel(&self.working_solution)
        } else {
            self.constraints.evaluate_all(&self.working_solution)
        };
        self.calculation_count += 1;
        trace!(
            event = "score_calculated",
            score = %score,
            calculation = self.calculation_count,
        );

        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn change_value(&mut self, entity_index: usize, value: Option<S::Value>) -> Result<()> {
        let unchanged = entity_index < self.working_solution.entity_count()
            && self.working_solution.value(entity_index) == value;
        self.working_solution.change_value(entity_index, value)?;
        if !unchanged {
            self.mark_dirty();
        }
        Ok(())
    }

    fn explain(&self) -> ScoreExplanation<S::Score> {
        self.constraints.explain(&self.working_solution)
    }

    fn clone_working_solution(&self) -> S {
        self.working_solution.clone()
    }

    fn constraint_count(&self) -> usize {
        self.constraints.constraint_count()
    }

    fn calculation_count(&self) -> u64 {
        self.calculation_count
    }
}
