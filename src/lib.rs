//! Pizza Preferences Service Library
//!
//! Customers register an email address with their preferred pizza toppings;
//! UI clients read back topping popularity and per-customer preferences.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::build_router;
pub use validation::{is_valid_email, Email, EmailValidator};

use sqlx::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub email_validator: EmailValidator,
}

impl AppState {
    /// Create a new AppState, compiling the configured email pattern if one is set
    pub fn new(pool: PgPool, config: Config) -> std::result::Result<Self, regex::Error> {
        let email_validator = match config.email_pattern.as_deref() {
            Some(pattern) => EmailValidator::with_pattern(pattern)?,
            None => EmailValidator::default(),
        };

        Ok(Self {
            pool,
            config,
            email_validator,
        })
    }
}
