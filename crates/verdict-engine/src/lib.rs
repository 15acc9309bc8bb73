//! Verdict Engine - Policy assembly and decision evaluation
//!
//! This crate turns the core specification types into decisions:
//! - A recursive evaluator for specification trees
//! - The canonical approval policy
//! - The fail-closed decision boundary, `decide`

pub mod decision;
pub mod eval;
pub mod policy;

// Re-export commonly used items
pub use decision::{decide, Decision};
pub use eval::evaluate;
pub use policy::approval_policy;
