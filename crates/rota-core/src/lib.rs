//! Rota Core - score and planning-model types for the duty rota
//!
//! This crate provides the fundamental abstractions shared by the rest of
//! the workspace:
//! - Score types for ranking candidate rotas
//! - Constraint identity and score contributions
//! - Planning-model traits describing what an optimizer may change

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::{ConstraintRef, ImpactType, ScoreContribution};
pub use domain::{
    BasicVariableSolution, FieldValueRangeProvider, PlanningEntity, PlanningId,
    PlanningSolution, ValueRangeProvider,
};
pub use error::{Result, RotaError, ValidationError, ValidationErrorKind};
pub use score::{HardMediumSoftScore, ParseableScore, Score, ScoreLevel, ScoreParseError};
