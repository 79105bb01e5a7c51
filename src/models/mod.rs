pub mod customer;
pub mod topping;

pub use customer::CustomerPreferences;
pub use topping::{normalize_topping, normalize_toppings, Topping, ToppingWithCount};
