use axum::{extract::State, Json};

use crate::constants::FAVORITE_TOPPING;
use crate::db::QueryRepository;
use crate::error::Result;
use crate::models::{CustomerPreferences, Topping, ToppingWithCount};
use crate::AppState;

/// List preferred toppings
///
/// Returns every topping at least one customer chose, with the number of
/// distinct customers who chose it. Toppings nobody prefers are omitted.
pub async fn list_toppings(State(state): State<AppState>) -> Result<Json<Vec<ToppingWithCount>>> {
    let toppings = QueryRepository::new(&state.pool)
        .toppings_with_counts()
        .await?;

    Ok(Json(toppings))
}

/// List customers with their preferred toppings
///
/// Customers without any preference are omitted.
pub async fn toppings_by_customer(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerPreferences>>> {
    let customers = QueryRepository::new(&state.pool)
        .customer_preferences()
        .await?;

    Ok(Json(customers))
}

/// Return the house favorite topping, creating it if it does not exist yet
pub async fn favorite_topping(State(state): State<AppState>) -> Result<Json<Topping>> {
    let topping = QueryRepository::new(&state.pool)
        .get_or_create_topping(FAVORITE_TOPPING)
        .await?;

    Ok(Json(topping))
}
