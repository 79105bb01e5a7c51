//! PostgreSQL store adapter.
//!
//! All tables live in the `pizza` schema:
//!
//! - `customer` - one row per registered email
//! - `topping` - one row per normalized topping name
//! - `customer_topping` - preference links between the two
//!
//! Migrations are embedded from `./migrations` and applied at startup.

pub mod pool;
pub mod queries;
pub mod registration;
pub mod upsert;

use sqlx::{migrate::Migrator, PgPool};

use crate::error::Result;

pub use pool::create_pool;
pub use queries::QueryRepository;
pub use registration::RegistrationRepository;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
