use serde::{Deserialize, Serialize};

/// A customer and the names of the toppings they prefer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPreferences {
    pub id: i32,
    pub email: String,
    /// Normalized topping names, in no particular order
    pub toppings: Vec<String>,
}
