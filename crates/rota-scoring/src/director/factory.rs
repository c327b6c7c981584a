//! Score director factory for creating score directors.

use std::marker::PhantomData;

use rota_core::domain::BasicVariableSolution;

use crate::api::ConstraintSet;

use super::simple::SimpleScoreDirector;

/// Factory for creating score directors that share one constraint set.
pub struct ScoreDirectorFactory<S: BasicVariableSolution, C> {
    constraints: C,
    parallel_evaluation: bool,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, C> ScoreDirectorFactory<S, C>
where
    S: BasicVariableSolution,
    C: ConstraintSet<S, S::Score>,
{
    /// Creates a new ScoreDirectorFactory.
    pub fn new(constraints: C) -> Self {
        Self {
            constraints,
            parallel_evaluation: false,
            _phantom: PhantomData,
        }
    }

    /// Makes every built director evaluate constraints in parallel.
    pub fn with_parallel_evaluation(mut self, enabled: bool) -> Self {
        self.parallel_evaluation = enabled;
        self
    }

    /// Creates a new score director for the given solution.
    pub fn build_score_director(&self, solution: S) -> SimpleScoreDirector<S, &C> {
        SimpleScoreDirector::new(solution, &self.constraints)
            .with_parallel_evaluation(self.parallel_evaluation)
    }

    /// Returns the constraint set.
    pub fn constraints(&self) -> &C {
        &self.constraints
    }
}

impl<S: BasicVariableSolution, C: Clone> Clone for ScoreDirectorFactory<S, C> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
            parallel_evaluation: self.parallel_evaluation,
            _phantom: PhantomData,
        }
    }
}
