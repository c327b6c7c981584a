// Tuple-based constraint sets.
//
// A constraint set evaluates several constraints against one solution and
// sums their scores. Sets are tuples of concrete constraint types, so the
// sequential path involves no virtual dispatch.

use rayon::prelude::*;

use rota_core::score::{Score, ScoreLevel};

use super::analysis::{ConstraintAnalysis, ScoreExplanation};
use super::constraint::Constraint;

/// Result of evaluating a single constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult<Sc> {
    /// Constraint name.
    pub name: String,
    /// Level the constraint affects.
    pub level: ScoreLevel,
    /// Score contribution from this constraint.
    pub score: Sc,
    /// Number of matches for this constraint.
    pub match_count: usize,
}

/// A set of constraints that can be evaluated together.
///
/// Evaluation is side-effect free, so `evaluate_all` and
/// `evaluate_all_parallel` always agree.
pub trait ConstraintSet<S, Sc: Score>: Send + Sync {
    /// Evaluates all constraints in order and returns the total score.
    fn evaluate_all(&self, solution: &S) -> Sc;

    /// Evaluates the constraints on the rayon pool and returns the total score.
    fn evaluate_all_parallel(&self, solution: &S) -> Sc;

    /// Returns the number of constraints in this set.
    fn constraint_count(&self) -> usize;

    /// Evaluates each constraint individually.
    fn evaluate_each(&self, solution: &S) -> Vec<ConstraintResult<Sc>>;

    /// Evaluates each constraint with detailed match information.
    fn evaluate_detailed(&self, solution: &S) -> Vec<ConstraintAnalysis<Sc>>;

    /// Builds a full score explanation.
    fn explain(&self, solution: &S) -> ScoreExplanation<Sc> {
        ScoreExplanation::new(self.evaluate_detailed(solution))
    }
}

impl<S, Sc, T> ConstraintSet<S, Sc> for &T
where
    Sc: Score,
    T: ConstraintSet<S, Sc> + ?Sized,
{
    #[inline]
    fn evaluate_all(&self, solution: &S) -> Sc {
        (**self).evaluate_all(solution)
    }

    #[inline]
    fn evaluate_all_parallel(&self, solution: &S) -> Sc {
        (**self).evaluate_all_parallel(solution)
    }

    #[inline]
    fn constraint_count(&self) -> usize {
        (**self).constraint_count()
    }

    fn evaluate_each(&self, solution: &S) -> Vec<ConstraintResult<Sc>> {
        (**self).evaluate_each(solution)
    }

    fn evaluate_detailed(&self, solution: &S) -> Vec<ConstraintAnalysis<Sc>> {
        (**self).evaluate_detailed(solution)
    }
}

// Implements `ConstraintSet` for tuples of constraints.
macro_rules! impl_constraint_set_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<S, Sc, $($T),+> ConstraintSet<S, Sc> for ($($T,)+)
        where
            S: Send + Sync,
            Sc: Score,
            $($T: Constraint<S, Sc>,)+
        {
            #[inline]
            fn evaluate_all(&self, solution: &S) -> Sc {
                let mut total = Sc::zero();
                $(total = total + self.$idx.evaluate(solution);)+
                total
            }

            fn evaluate_all_parallel(&self, solution: &S) -> Sc {
                let constraints: Vec<&(dyn Constraint<S, Sc> + Sync)> = vec![$(&self.$idx),+];
                constraints
                    .par_iter()
                    .map(|c| c.evaluate(solution))
                    .reduce(Sc::zero, |a, b| a + b)
            }

            #[inline]
            fn constraint_count(&self) -> usize {
                let mut count = 0;
                $(let _ = &self.$idx; count += 1;)+
                count
            }

            fn evaluate_each(&self, solution: &S) -> Vec<ConstraintResult<Sc>> {
                vec![$(ConstraintResult {
                    name: self.$idx.name().to_string(),
                    level: self.$idx.level(),
                    score: self.$idx.evaluate(solution),
                    match_count: self.$idx.match_count(solution),
                }),+]
            }

            fn evaluate_detailed(&self, solution: &S) -> Vec<ConstraintAnalysis<Sc>> {
                vec![$({
                    let matches = self.$idx.get_matches(solution);
                    let score = matches.iter().fold(Sc::zero(), |total, m| total + m.score);
                    ConstraintAnalysis::new(
                        self.$idx.constraint_ref().clone(),
                        self.$idx.level(),
                        self.$idx.weight(),
                        score,
                        matches,
                    )
                }),+]
            }
        }
    };
}

impl_constraint_set_for_tuple!(0: C0);
impl_constraint_set_for_tuple!(0: C0, 1: C1);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11);
