// Score director trait definition.

use rota_core::domain::BasicVariableSolution;
use rota_core::Result;

use crate::api::ScoreExplanation;

// The score director manages solution state and score calculation.
//
// It is responsible for:
// - Maintaining the working solution
// - Applying variable changes, refusing pinned entities
// - Calculating scores and caching them between changes
// - Explaining the current score per constraint
//
// The trait is object safe so optimizers can take `&mut dyn ScoreDirector<S>`.
pub trait ScoreDirector<S: BasicVariableSolution>: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    // Calculates and returns the current score.
    fn calculate_score(&mut self) -> S::Score;

    // Changes one entity's variable.
    //
    // Fails for pinned entities, out-of-range indices and values outside
    // the value range. A failed change leaves the solution untouched.
    fn change_value(&mut self, entity_index: usize, value: Option<S::Value>) -> Result<()>;

    // Returns the number of planning entities.
    fn entity_count(&self) -> usize {
        self.working_solution().entity_count()
    }

    // Returns the entities the optimizer may change.
    fn movable_entities(&self) -> Vec<usize> {
        self.working_solution().movable_entities()
    }

    // Returns every legal non-null value.
    fn value_range(&self) -> Vec<S::Value> {
        self.working_solution().value_range()
    }

    // Explains the current score constraint by constraint.
    fn explain(&self) -> ScoreExplanation<S::Score>;

    // Clones the working solution.
    fn clone_working_solution(&self) -> S;

    // Returns the number of constraints being scored.
    fn constraint_count(&self) -> usize;

    // Returns how many full score calculations have run.
    fn calculation_count(&self) -> u64;
}
