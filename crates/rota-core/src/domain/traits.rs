//! Core domain traits

use std::hash::Hash;

use crate::error::{Result, RotaError};
use crate::score::Score;

/// Marker trait for planning solutions.
///
/// A planning solution holds both the problem definition and the
/// (potentially partial) assignment, plus the score it was last given.
///
/// # Example
///
/// ```
/// use rota_core::{HardMediumSoftScore, PlanningSolution};
///
/// #[derive(Clone)]
/// struct Week {
///     slots: Vec<Option<usize>>,
///     score: Option<HardMediumSoftScore>,
/// }
///
/// impl PlanningSolution for Week {
///     type Score = HardMediumSoftScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
///
/// Planning solutions must be `Send + Sync` so an optimizer can score
/// candidate solutions from several threads.
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score of this solution, if calculated.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);
}

/// Trait for planning entities.
///
/// Entities can be "pinned" to prevent the optimizer from changing them.
pub trait PlanningEntity: Clone + Send + Sync + 'static {
    /// Returns true if this entity is pinned (should not be changed).
    fn is_pinned(&self) -> bool {
        false
    }
}

/// Trait for unique identification of entities and facts.
///
/// # Example
///
/// ```
/// use rota_core::PlanningId;
///
/// struct Slot {
///     id: u64,
/// }
///
/// impl PlanningId for Slot {
///     type Id = u64;
///     fn planning_id(&self) -> u64 { self.id }
/// }
/// ```
pub trait PlanningId {
    /// The type of the unique identifier.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + 'static;

    /// Returns the unique identifier for this object.
    ///
    /// This must never return a value that changes during solving.
    fn planning_id(&self) -> Self::Id;
}

/// A solution with one basic, possibly unassigned, planning variable per entity.
///
/// This is the surface an external optimizer works against: it enumerates
/// the entities, skips pinned ones, reads the value range and writes new
/// values. Nothing here decides which moves to try.
pub trait BasicVariableSolution: PlanningSolution {
    /// The planning value type (typically an index into a fact collection).
    type Value: Copy + Eq + Send + Sync + 'static;

    /// Returns the number of planning entities.
    fn entity_count(&self) -> usize;

    /// Returns true if the entity's variable is fixed.
    fn is_pinned(&self, entity_index: usize) -> bool;

    /// Returns the current value of the entity's variable.
    fn value(&self, entity_index: usize) -> Option<Self::Value>;

    /// Writes the entity's variable without any pinning check.
    ///
    /// Use [`change_value`](BasicVariableSolution::change_value) from
    /// optimizer code.
    fn set_value(&mut self, entity_index: usize, value: Option<Self::Value>);

    /// Returns every legal non-null value.
    fn value_range(&self) -> Vec<Self::Value>;

    /// Returns true if `value` is in the value range.
    fn is_legal_value(&self, value: &Self::Value) -> bool {
        self.value_range().contains(value)
    }

    /// Returns true if `None` is a legal value.
    fn allows_unassigned(&self) -> bool {
        true
    }

    /// Returns the indices of entities the optimizer may change.
    fn movable_entities(&self) -> Vec<usize> {
        (0..self.entity_count())
            .filter(|&i| !self.is_pinned(i))
            .collect()
    }

    /// Changes the entity's variable, refusing pinned entities.
    fn change_value(&mut self, entity_index: usize, value: Option<Self::Value>) -> Result<()> {
        let count = self.entity_count();
        if entity_index >= count {
            return Err(RotaError::EntityOutOfRange {
                index: entity_index,
                count,
            });
        }
        if self.is_pinned(entity_index) {
            return Err(RotaError::PinnedEntity { entity_index });
        }
        match value {
            Some(ref v) if !self.is_legal_value(v) => {
                return Err(RotaError::IllegalValue { entity_index });
            }
            None if !self.allows_unassigned() => {
                return Err(RotaError::DomainModel(format!(
                    "entity {} cannot be left unassigned",
                    entity_index
                )));
            }
            _ => {}
        }
        self.set_value(entity_index, value);
        Ok(())
    }
}
