//! Common fixtures for engine integration tests

#![allow(dead_code)]

use verdict_core::facts::{Item, Order, User};

/// Build a user from plain flags
pub fn user(is_premium: bool, is_admin: bool, is_trial: bool, region: &str) -> User {
    User::new(is_premium, is_admin, is_trial, region.to_string())
}

/// Build an order with an empty item list
pub fn order(amount: f64, has_discount: bool, currency: &str, kind: &str) -> Order {
    Order::new(
        amount,
        has_discount,
        "US".to_string(),
        currency.to_string(),
        kind.to_string(),
    )
}

/// Two well-formed items
pub fn standard_items() -> Vec<Item> {
    vec![
        Item::new("Stock A".to_string(), 100.0),
        Item::new("Stock B".to_string(), 200.0),
    ]
}

/// One well-formed item plus one with a negative price
pub fn negative_items() -> Vec<Item> {
    vec![
        Item::new("Stock A".to_string(), 100.0),
        Item::new("Bad Data".to_string(), -50.0),
    ]
}
