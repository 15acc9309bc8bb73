//! Canonical approval policy
//!
//! Assembles the fixed decision policy from atomic predicates and
//! combinators. Three branches are OR-combined and a cross-cutting
//! crypto-safety gate is AND-ed onto the result, so the gate constrains
//! every approval path uniformly.

use verdict_core::spec::{Predicate, Specification};

fn atom(predicate: Predicate) -> Specification {
    Specification::atom(predicate)
}

/// Non-premium users are approved only when they are administrators.
fn non_premium_branch() -> Specification {
    Specification::and(
        Specification::negate(atom(Predicate::UserIsPremium)),
        atom(Predicate::UserIsAdmin),
    )
}

/// Premium users with orders at or below the high-value threshold need a
/// valid bulk order.
fn low_value_branch() -> Specification {
    Specification::and(
        Specification::and(
            atom(Predicate::UserIsPremium),
            Specification::negate(atom(Predicate::HighValueOrder)),
        ),
        atom(Predicate::ValidBulkOrder),
    )
}

/// Premium users with high-value orders need no discount plus regional
/// compliance. The two compliance rules partition on the user's region,
/// so their OR covers exactly one of them per user.
fn high_value_branch() -> Specification {
    let compliance = Specification::or(
        atom(Predicate::EuCompliant),
        atom(Predicate::NonEuCompliant),
    );
    Specification::and(
        Specification::and(
            Specification::and(
                atom(Predicate::UserIsPremium),
                atom(Predicate::HighValueOrder),
            ),
            atom(Predicate::NoDiscount),
        ),
        compliance,
    )
}

/// Build the full approval policy.
///
/// The branches happen to be mutually exclusive (they partition on the
/// premium flag and the high-value threshold), but the policy does not
/// rely on that: an order is approved when any branch approves it and the
/// crypto-safety gate holds. The tree is pure and input-independent, so
/// callers may rebuild it per decision or cache it.
pub fn approval_policy() -> Specification {
    let branches = Specification::or(
        Specification::or(non_premium_branch(), low_value_branch()),
        high_value_branch(),
    );
    Specification::and(branches, atom(Predicate::CryptoSafe))
}
