//! Fact model: the read-only values every predicate reads
//!
//! These are plain value bundles. Construction and transport belong to
//! the caller; the engine only reads them and must tolerate whatever it
//! is handed. Nothing here is validated: amounts may be NaN or infinite,
//! string fields may be empty or arbitrary, and the item collection may
//! be absent entirely.

use serde::{Deserialize, Serialize};

/// A single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item name
    pub name: String,

    /// Unit price. May be negative, NaN, or infinite; not validated upstream.
    pub price: f64,
}

/// A commercial order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order total. May be non-finite.
    pub amount: f64,

    /// Whether a discount was applied
    pub has_discount: bool,

    /// The order's own region tag, distinct from the user's region
    pub region: String,

    /// Currency code. Free-form: "USD", "EUR", "BTC", or anything else.
    pub currency: String,

    /// Order kind: "bulk", "normal", or arbitrary
    #[serde(rename = "type")]
    pub kind: String,

    /// Order lines. `None` when the collection was absent at the boundary;
    /// predicates that need it treat absence as an evaluation fault.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

/// The user placing an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Premium account flag
    pub is_premium: bool,

    /// Administrator flag
    pub is_admin: bool,

    /// Trial account flag
    pub is_trial: bool,

    /// User region tag (e.g. "EU", "US")
    pub region: String,
}

impl Item {
    /// Create a new item
    pub fn new(name: String, price: f64) -> Self {
        Item { name, price }
    }
}

impl Order {
    /// Create a new order with an empty item list
    pub fn new(
        amount: f64,
        has_discount: bool,
        region: String,
        currency: String,
        kind: String,
    ) -> Self {
        Order {
            amount,
            has_discount,
            region,
            currency,
            kind,
            items: Some(Vec::new()),
        }
    }

    /// Set the order lines
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Drop the item collection, as when it was absent at the boundary
    pub fn without_items(mut self) -> Self {
        self.items = None;
        self
    }
}

impl User {
    /// Create a new user
    pub fn new(is_premium: bool, is_admin: bool, is_trial: bool, region: String) -> Self {
        User {
            is_premium,
            is_admin,
            is_trial,
            region,
        }
    }
}
