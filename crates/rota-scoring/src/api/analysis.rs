//! Score analysis types.
//!
//! A score explanation breaks a total score down per constraint, and each
//! constraint down to the matches that produced it, with the entities
//! behind every match.

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Write};

use rota_core::score::{Score, ScoreLevel};
use rota_core::ConstraintRef;

/// An entity named in a match justification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityRef {
    /// Kind of entity, e.g. "Task" or "Employee".
    pub type_name: String,
    /// How the entity is shown to a reader.
    pub display: String,
}

impl EntityRef {
    /// Creates a reference that displays the entity through `Debug`.
    pub fn new<T: Debug>(entity: &T) -> Self {
        Self {
            type_name: short_type_name::<T>().to_string(),
            display: format!("{:?}", entity),
        }
    }

    pub fn with_display(type_name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            display: display.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self.display)
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// The entities behind one match, plus readable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintJustification {
    pub entities: Vec<EntityRef>,
    /// Defaults to the entity displays joined by commas.
    pub description: String,
}

impl ConstraintJustification {
    /// Builds the description from the entities themselves.
    pub fn new(entities: Vec<EntityRef>) -> Self {
        let description = if entities.is_empty() {
            "No entities".to_string()
        } else {
            entities
                .iter()
                .map(|e| e.display.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            entities,
            description,
        }
    }

    pub fn with_description(entities: Vec<EntityRef>, description: impl Into<String>) -> Self {
        Self {
            entities,
            description: description.into(),
        }
    }
}

/// One match together with the score it produced and its justification.
#[derive(Debug, Clone)]
pub struct DetailedConstraintMatch<Sc: Score> {
    pub constraint_ref: ConstraintRef,
    /// Signed score of this match alone.
    pub score: Sc,
    pub justification: ConstraintJustification,
}

impl<Sc: Score> DetailedConstraintMatch<Sc> {
    pub fn new(
        constraint_ref: ConstraintRef,
        score: Sc,
        justification: ConstraintJustification,
    ) -> Self {
        Self {
            constraint_ref,
            score,
            justification,
        }
    }
}

/// What one constraint contributed to a score.
#[derive(Debug, Clone)]
pub struct ConstraintAnalysis<Sc: Score> {
    pub constraint_ref: ConstraintRef,
    pub level: ScoreLevel,
    /// Score of a single unit-weight match.
    pub weight: Sc,
    /// Sum of the match scores.
    pub score: Sc,
    pub matches: Vec<DetailedConstraintMatch<Sc>>,
}

impl<Sc: Score> ConstraintAnalysis<Sc> {
    pub fn new(
        constraint_ref: ConstraintRef,
        level: ScoreLevel,
        weight: Sc,
        score: Sc,
        matches: Vec<DetailedConstraintMatch<Sc>>,
    ) -> Self {
        Self {
            constraint_ref,
            level,
            weight,
            score,
            matches,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }

    pub fn is_hard(&self) -> bool {
        self.level == ScoreLevel::Hard
    }
}

/// A score broken down constraint by constraint.
#[derive(Debug, Clone)]
pub struct ScoreExplanation<Sc: Score> {
    pub score: Sc,
    /// Per-constraint breakdown, in constraint-set order.
    pub constraint_analyses: Vec<ConstraintAnalysis<Sc>>,
}

impl<Sc: Score> ScoreExplanation<Sc> {
    /// Creates an explanation whose total is the sum of its analyses.
    pub fn new(constraint_analyses: Vec<ConstraintAnalysis<Sc>>) -> Self {
        let score = constraint_analyses
            .iter()
            .fold(Sc::zero(), |total, a| total + a.score);
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Number of matches over every constraint.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Analyses whose constraint moved the score.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != Sc::zero())
            .collect()
    }

    /// Finds the analysis of a constraint by name.
    pub fn constraint(&self, name: &str) -> Option<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses.iter().find(|a| a.name() == name)
    }

    pub fn all_matches(&self) -> Vec<&DetailedConstraintMatch<Sc>> {
        self.constraint_analyses
            .iter()
            .flat_map(|a| &a.matches)
            .collect()
    }

    /// Sums match scores per involved entity.
    ///
    /// A match involving two entities counts fully against both.
    pub fn score_by_entity(&self) -> BTreeMap<EntityRef, Sc> {
        let mut totals = BTreeMap::new();
        for m in self.all_matches() {
            for entity in &m.justification.entities {
                let total = totals.entry(entity.clone()).or_insert_with(Sc::zero);
                *total = *total + m.score;
            }
        }
        totals
    }

    /// Renders a multi-line summary of the non-zero constraints.
    pub fn summary(&self) -> String {
        let mut out = format!("Score: {}\n", self.score);
        for analysis in self.non_zero_constraints() {
            let _ = writeln!(
                out,
                "  {:<50} {:>6} match(es)  {}",
                analysis.name(),
                analysis.match_count(),
                analysis.score
            );
        }
        out
    }
}
