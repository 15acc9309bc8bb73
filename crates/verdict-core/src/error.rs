//! Error types for Verdict Core

use thiserror::Error;

/// Evaluation error
///
/// Faults raised while walking a specification tree. They are never
/// surfaced to callers of the decision boundary, which converts every
/// fault into a rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A collection a predicate needed was absent from the order
    #[error("Missing collection: {0}")]
    MissingCollection(&'static str),
}

/// Result type for specification evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
