//! Constraint scoring for the duty rota.
//!
//! This crate provides the generic scoring machinery:
//! - The `Constraint` trait every constraint evaluator implements
//! - Tuple-based constraint sets, evaluated sequentially or on the rayon pool
//! - Score explanation types (per-constraint breakdown with justifications)
//! - Score directors, the handle an external optimizer scores solutions through
//!
//! # Architecture
//!
//! Constraint sets are tuples of concrete constraint types, so the
//! sequential path is fully monomorphized. Evaluation is a pure function
//! of the solution: the same solution always yields the same score.

#![allow(clippy::type_complexity)]

pub mod api;
pub mod director;

pub use api::analysis::{
    ConstraintAnalysis, ConstraintJustification, DetailedConstraintMatch, EntityRef,
    ScoreExplanation,
};
pub use api::constraint::{Constraint, ConstraintMatch};
pub use api::constraint_set::{ConstraintResult, ConstraintSet};
pub use director::{ScoreDirector, ScoreDirectorFactory, SimpleScoreDirector};
