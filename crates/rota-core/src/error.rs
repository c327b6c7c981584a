//! Error types for the rota workspace

use std::fmt;

use thiserror::Error;

/// Main error type for rota operations.
///
/// Scoring itself never fails for a validated roster; every variant here is
/// raised either while building the domain model or at the solving boundary.
#[derive(Debug, Error)]
pub enum RotaError {
    /// Error in the domain model definition
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// One or more validation problems found while building a roster
    #[error("Invalid roster: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The optimizer tried to change a pinned entity
    #[error("Entity {entity_index} is pinned and cannot be reassigned")]
    PinnedEntity { entity_index: usize },

    /// Entity index outside the solution's entity collection
    #[error("Entity index {index} out of range (entity count {count})")]
    EntityOutOfRange { index: usize, count: usize },

    /// Value outside the planning variable's value range
    #[error("Value proposed for entity {entity_index} is not in its value range")]
    IllegalValue { entity_index: usize },

    /// The external optimizer could not produce a solution
    #[error("Solving failed: {0}")]
    SolvingFailed(String),
}

/// Result type alias for rota operations
pub type Result<T> = std::result::Result<T, RotaError>;

/// A single construction-time validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Two employees share the same name, or two tasks the same id.
    DuplicateId,
    /// A per-shift or per-duty table does not have the expected size.
    IncompleteTable,
    /// A task references an employee that is not on the roster.
    UnknownEmployee,
    /// A task references a shift or duty index outside the closed set.
    OutOfRange,
    /// Task ids do not increase in creation order, or only some tasks
    /// carry one.
    TaskIdOrder,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_all_errors() {
        let err = RotaError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate employee name: Ann"),
            ValidationError::new(ValidationErrorKind::OutOfRange, "Shift index 12 out of range"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid roster: Duplicate employee name: Ann; Shift index 12 out of range"
        );
    }

    #[test]
    fn test_pinned_entity_message() {
        let err = RotaError::PinnedEntity { entity_index: 3 };
        assert_eq!(
            err.to_string(),
            "Entity 3 is pinned and cannot be reassigned"
        );
    }
}
