//! Recursive specification evaluator

use verdict_core::facts::{Order, User};
use verdict_core::spec::Specification;
use verdict_core::Result;

/// Evaluate a specification tree against one order/user pair.
///
/// The walk is strictly left-to-right in nesting order. `And` skips its
/// right child when the left is false and `Or` skips it when the left is
/// true, so a fault in a skipped subtree is never observed. Children are
/// never reordered or deduplicated.
pub fn evaluate(spec: &Specification, order: &Order, user: &User) -> Result<bool> {
    match spec {
        Specification::Atomic(predicate) => predicate.eval(order, user),
        Specification::And(left, right) => {
            if !evaluate(left, order, user)? {
                return Ok(false);
            }
            evaluate(right, order, user)
        }
        Specification::Or(left, right) => {
            if evaluate(left, order, user)? {
                return Ok(true);
            }
            evaluate(right, order, user)
        }
        Specification::Not(inner) => Ok(!evaluate(inner, order, user)?),
    }
}
