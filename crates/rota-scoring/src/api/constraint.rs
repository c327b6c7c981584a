// A single constraint evaluator.

use smallvec::SmallVec;

use rota_core::score::{Score, ScoreLevel};
use rota_core::{ConstraintRef, ImpactType, ScoreContribution};

use super::analysis::{ConstraintJustification, DetailedConstraintMatch};

/// One match of a constraint: the entities involved and its weight.
///
/// `indices` are positions in whichever collection the constraint iterates
/// (tasks for per-task and pairwise constraints, employees for grouped
/// ones). The owning constraint knows how to turn them into a
/// justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatch {
    /// Unsigned weight of this match.
    pub magnitude: i64,
    /// Entity indices involved in the match.
    pub indices: SmallVec<[usize; 2]>,
}

impl ConstraintMatch {
    /// A unit-weight match on one entity.
    pub fn single(index: usize) -> Self {
        Self::weighted(index, 1)
    }

    /// A match on one entity with the given weight.
    pub fn weighted(index: usize, magnitude: i64) -> Self {
        let mut indices = SmallVec::new();
        indices.push(index);
        Self { magnitude, indices }
    }

    /// A unit-weight match on an unordered pair of entities.
    pub fn pair(first: usize, second: usize) -> Self {
        let mut indices = SmallVec::new();
        indices.push(first);
        indices.push(second);
        Self {
            magnitude: 1,
            indices,
        }
    }
}

/// A constraint evaluator.
///
/// A constraint inspects a solution and reports zero or more matches. Each
/// match contributes `magnitude` units at the constraint's level, with the
/// sign given by its impact type. Evaluation must be a pure function of
/// the solution.
///
/// Implementors provide identity, level, impact, match collection and
/// justification; scoring, counting and explanation are derived.
pub trait Constraint<S, Sc: Score>: Send + Sync {
    /// Returns the constraint reference (package + name).
    fn constraint_ref(&self) -> &ConstraintRef;

    /// Returns the score level this constraint affects.
    fn level(&self) -> ScoreLevel;

    /// Returns whether matches are penalized or rewarded.
    fn impact_type(&self) -> ImpactType;

    /// Appends every match in `solution` to `matches`.
    fn collect_matches(&self, solution: &S, matches: &mut Vec<ConstraintMatch>);

    /// Describes the entities behind a match.
    fn justify(&self, solution: &S, constraint_match: &ConstraintMatch)
        -> ConstraintJustification;

    /// Returns the constraint name.
    fn name(&self) -> &str {
        &self.constraint_ref().name
    }

    /// Returns true if this is a hard constraint.
    fn is_hard(&self) -> bool {
        self.level() == ScoreLevel::Hard
    }

    /// Returns the score of a single unit-weight match.
    fn weight(&self) -> Sc {
        ScoreContribution::new(self.level(), 1, self.impact_type()).to_score()
    }

    /// Returns one score contribution per match.
    fn contributions(&self, solution: &S) -> Vec<ScoreContribution> {
        let mut matches = Vec::new();
        self.collect_matches(solution, &mut matches);
        matches
            .iter()
            .map(|m| ScoreContribution::new(self.level(), m.magnitude, self.impact_type()))
            .collect()
    }

    /// Full evaluation of this constraint: the sum of its match scores.
    fn evaluate(&self, solution: &S) -> Sc {
        let mut matches = Vec::new();
        self.collect_matches(solution, &mut matches);
        matches.iter().fold(Sc::zero(), |total, m| {
            total + ScoreContribution::new(self.level(), m.magnitude, self.impact_type()).to_score()
        })
    }

    /// Returns the number of matches for this constraint.
    fn match_count(&self, solution: &S) -> usize {
        let mut matches = Vec::new();
        self.collect_matches(solution, &mut matches);
        matches.len()
    }

    /// Returns detailed matches with entity justifications.
    fn get_matches(&self, solution: &S) -> Vec<DetailedConstraintMatch<Sc>> {
        let mut matches = Vec::new();
        self.collect_matches(solution, &mut matches);
        matches
            .iter()
            .map(|m| {
                let score =
                    ScoreContribution::new(self.level(), m.magnitude, self.impact_type()).to_score();
                DetailedConstraintMatch::new(
                    self.constraint_ref().clone(),
                    score,
                    self.justify(solution, m),
                )
            })
            .collect()
    }
}
