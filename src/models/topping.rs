use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A topping row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topping {
    pub id: i32,
    /// Normalized (lowercase) name
    pub topping: String,
}

/// A topping together with how many distinct customers prefer it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ToppingWithCount {
    pub id: i32,
    pub topping: String,
    pub customer_count: i64,
}

/// Canonical form of a topping name, so "Cheese" and "cheese" are one row
pub fn normalize_topping(name: &str) -> String {
    name.to_lowercase()
}

/// Normalize a requested topping list: lowercased, deduplicated and sorted.
///
/// Writers upsert toppings in this order, which keeps lock acquisition
/// consistent between concurrent registrations.
pub fn normalize_toppings(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize_topping(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
