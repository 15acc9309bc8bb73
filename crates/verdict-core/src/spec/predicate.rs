//! Atomic business predicates
//!
//! Each predicate is a pure function of one `(Order, User)` pair. The set
//! is closed: the evaluator matches exhaustively, so adding a variant
//! forces every match site to handle it.

use crate::error::{EvalError, Result};
use crate::facts::{Order, User};
use serde::{Deserialize, Serialize};

/// Identifier of one atomic business rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// The user holds a premium account
    UserIsPremium,

    /// The user is an administrator
    UserIsAdmin,

    /// `order.amount > 1000`, strict. NaN amounts compare false and are
    /// therefore never high-value.
    HighValueOrder,

    /// No discount was applied to the order
    NoDiscount,

    /// Order kind is exactly "bulk" and the user is not on a trial
    ValidBulkOrder,

    /// EU users must pay in EUR. False for every non-EU user, not
    /// "inapplicable": it only ever contributes true for EU users.
    EuCompliant,

    /// Non-EU users must have no item priced below zero (an empty list is
    /// vacuously compliant). False for EU users.
    NonEuCompliant,

    /// Large BTC orders require a premium account
    CryptoSafe,
}

impl Predicate {
    /// Evaluate this predicate against one order/user pair.
    ///
    /// Predicates are pure and side-effect free. The only fault they can
    /// raise is a missing item collection; converting faults to outcomes
    /// is the decision boundary's job, not theirs.
    pub fn eval(&self, order: &Order, user: &User) -> Result<bool> {
        match self {
            Predicate::UserIsPremium => Ok(user.is_premium),
            Predicate::UserIsAdmin => Ok(user.is_admin),
            Predicate::HighValueOrder => Ok(order.amount > 1000.0),
            Predicate::NoDiscount => Ok(!order.has_discount),
            Predicate::ValidBulkOrder => Ok(order.kind == "bulk" && !user.is_trial),
            Predicate::EuCompliant => {
                if user.region == "EU" {
                    Ok(order.currency == "EUR")
                } else {
                    Ok(false)
                }
            }
            Predicate::NonEuCompliant => {
                if user.region == "EU" {
                    return Ok(false);
                }
                let items = order
                    .items
                    .as_ref()
                    .ok_or(EvalError::MissingCollection("items"))?;
                Ok(items.iter().all(|item| item.price >= 0.0))
            }
            Predicate::CryptoSafe => {
                let risky =
                    order.currency == "BTC" && order.amount > 2000.0 && !user.is_premium;
                Ok(!risky)
            }
        }
    }
}
