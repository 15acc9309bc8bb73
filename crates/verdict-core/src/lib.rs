//! Verdict Core - Core types for the Verdict order-approval engine
//!
//! This crate provides the fundamental types used across the Verdict ecosystem:
//! - Fact model (`Order`, `User`, `Item`) supplying predicate inputs
//! - Specification tree (atomic predicates and AND/OR/NOT combinators)
//! - Evaluation error types

pub mod error;
pub mod facts;
pub mod spec;

// Re-export commonly used types
pub use error::{EvalError, Result};
pub use facts::{Item, Order, User};
pub use spec::{Predicate, Specification};
