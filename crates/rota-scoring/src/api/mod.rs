//! Constraint API.
//!
//! This module provides:
//! - `Constraint` trait for a single constraint evaluator
//! - `ConstraintSet` trait for tuple-based evaluation of many constraints
//! - Analysis types for score explanation

pub mod analysis;
pub mod constraint;
pub mod constraint_set;

#[cfg(test)]
mod tests;

pub use analysis::{
    ConstraintAnalysis, ConstraintJustification, DetailedConstraintMatch, EntityRef,
    ScoreExplanation,
};
pub use constraint::{Constraint, ConstraintMatch};
pub use constraint_set::{ConstraintResult, ConstraintSet};
