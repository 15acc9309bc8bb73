//! Specification tree: composable boolean rules over the fact model
//!
//! A `Specification` is an immutable boolean expression evaluated against
//! one `(Order, User)` pair. Atomic nodes name a single business
//! predicate; composite nodes combine children with AND/OR/NOT. Nodes own
//! their children exclusively, so a specification is always a tree, never
//! a graph.

pub mod predicate;

pub use predicate::Predicate;

use serde::{Deserialize, Serialize};

/// One node of a boolean rule expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Specification {
    /// Terminal node: a single named predicate
    Atomic(Predicate),

    /// Both children must hold. The right child is not evaluated when the
    /// left child is false.
    And(Box<Specification>, Box<Specification>),

    /// At least one child must hold. The right child is not evaluated
    /// when the left child is true.
    Or(Box<Specification>, Box<Specification>),

    /// Negation of the child
    Not(Box<Specification>),
}

impl Specification {
    /// Create an atomic node
    pub fn atom(predicate: Predicate) -> Self {
        Specification::Atomic(predicate)
    }

    /// Create an AND node
    pub fn and(left: Specification, right: Specification) -> Self {
        Specification::And(Box::new(left), Box::new(right))
    }

    /// Create an OR node
    pub fn or(left: Specification, right: Specification) -> Self {
        Specification::Or(Box::new(left), Box::new(right))
    }

    /// Create a NOT node
    pub fn negate(inner: Specification) -> Self {
        Specification::Not(Box::new(inner))
    }
}
