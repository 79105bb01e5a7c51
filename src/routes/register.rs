use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::constants::REGISTER_OK;
use crate::db::RegistrationRepository;
use crate::error::{AppError, Result};
use crate::AppState;

/// Register a customer and their preferred toppings
///
/// `PUT /register/:email` with a JSON array of topping names as the body.
///
/// This is a PUT because it is idempotent: previous preferences are replaced,
/// not extended. Topping names are lowercased before storage.
///
/// Returns 400 with `Invalid Email Address` if the email fails validation; in
/// that case nothing is written.
pub async fn register_customer(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: std::result::Result<Json<Vec<String>>, JsonRejection>,
) -> Result<&'static str> {
    // Gate on malformed email before touching the body or the store
    let email = state.email_validator.parse(&email).map_err(|e| {
        tracing::warn!("Rejected registration for invalid email: {:?}", email);
        e
    })?;

    let Json(toppings) = payload.map_err(|rejection| {
        tracing::warn!("Rejected registration body for {}: {}", email, rejection);
        AppError::InvalidInput(rejection.body_text())
    })?;

    RegistrationRepository::new(&state.pool)
        .register(&email, &toppings)
        .await?;

    Ok(REGISTER_OK)
}
