//! Planning-model traits
//!
//! These traits describe a planning problem to an external optimizer:
//! - `PlanningSolution`: the complete candidate solution and its score
//! - `PlanningEntity`: something the optimizer assigns, possibly pinned
//! - `PlanningId`: stable identity of an entity
//! - `BasicVariableSolution`: the variables the optimizer may change
//! - `ValueRangeProvider`: the legal values of a planning variable

mod traits;
mod value_range;


pub use traits::{BasicVariableSolution, PlanningEntity, PlanningId, PlanningSolution};
pub use value_range::{FieldValueRangeProvider, ValueRangeProvider};
