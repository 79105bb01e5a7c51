pub mod health;
pub mod register;
pub mod toppings;

pub use health::{health_check, ping};
pub use register::register_customer;
pub use toppings::{favorite_topping, list_toppings, toppings_by_customer};

use axum::{
    http::{HeaderValue, Method},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, Config};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_toppings))
        .route("/toppingsByCustomer", get(toppings_by_customer))
        .route("/register/:email", put(register_customer))
        .route("/timsfavorite", get(favorite_topping))
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the configured UI origins
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any)
}
