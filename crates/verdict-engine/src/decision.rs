//! Decision boundary
//!
//! The single entry point of the engine. Evaluation faults never cross
//! this boundary: a malformed order is rejected, not surfaced as an
//! error, and certainly not approved.

use crate::eval::evaluate;
use crate::policy::approval_policy;
use serde::{Deserialize, Serialize};
use std::fmt;
use verdict_core::facts::{Order, User};

/// Final decision for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The order may proceed
    Approved,

    /// The order is blocked
    Rejected,
}

impl Decision {
    /// Wire token for this decision
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether to approve one order for one user.
///
/// Evaluates the canonical approval policy exactly once. Never panics and
/// never returns an error: any evaluation fault is converted into
/// [`Decision::Rejected`]. Stateless and deterministic, so identical
/// inputs always yield identical decisions.
pub fn decide(order: &Order, user: &User) -> Decision {
    let policy = approval_policy();
    match evaluate(&policy, order, user) {
        Ok(true) => Decision::Approved,
        Ok(false) => Decision::Rejected,
        Err(err) => {
            log::debug!("rejecting order after evaluation fault: {}", err);
            Decision::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_tokens() {
        assert_eq!(Decision::Approved.as_str(), "approved");
        assert_eq!(Decision::Rejected.as_str(), "rejected");
        assert_eq!(Decision::Approved.to_string(), "approved");
    }

    #[test]
    fn test_decision_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Decision::Approved).unwrap(),
            r#""approved""#
        );
        let parsed: Decision = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(parsed, Decision::Rejected);
    }

    #[test]
    fn test_fault_is_converted_to_rejection() {
        // Premium high-value non-EU order with a missing item collection:
        // the compliance scan faults and the boundary fails closed.
        let user = User::new(true, false, false, "US".to_string());
        let order = Order::new(
            1500.0,
            false,
            "US".to_string(),
            "USD".to_string(),
            "normal".to_string(),
        )
        .without_items();

        assert_eq!(decide(&order, &user), Decision::Rejected);
    }
}
