//! Insert-or-fetch helpers for the two uniquely keyed tables.
//!
//! Each helper runs `INSERT .. ON CONFLICT DO NOTHING RETURNING` unioned with a
//! plain `SELECT` in a single statement. When another transaction commits the
//! same key between our snapshot and our insert, neither branch sees the row;
//! the statement is then rerun with a fresh snapshot. Callers never observe a
//! unique violation for this race.

use sqlx::PgConnection;

use crate::constants::UPSERT_MAX_ATTEMPTS;
use crate::error::{AppError, Result};
use crate::models::Topping;

/// Return the id of the customer with this exact email, creating the row if needed
pub async fn upsert_customer(conn: &mut PgConnection, email: &str) -> Result<i32> {
    for attempt in 1..=UPSERT_MAX_ATTEMPTS {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            WITH inserted AS (
                INSERT INTO pizza.customer (email) VALUES ($1)
                ON CONFLICT (email) DO NOTHING
                RETURNING id
            )
            SELECT id FROM inserted
            UNION
            SELECT id FROM pizza.customer WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(id) = id {
            return Ok(id);
        }

        tracing::debug!("Customer upsert raced a concurrent insert (attempt {})", attempt);
    }

    Err(AppError::UpsertRetriesExhausted("pizza.customer"))
}

/// Return the topping row for an already normalized name, creating it if needed
pub async fn upsert_topping(conn: &mut PgConnection, name: &str) -> Result<Topping> {
    for attempt in 1..=UPSERT_MAX_ATTEMPTS {
        let topping = sqlx::query_as::<_, Topping>(
            r#"
            WITH inserted AS (
                INSERT INTO pizza.topping (topping) VALUES ($1)
                ON CONFLICT (topping) DO NOTHING
                RETURNING id, topping
            )
            SELECT id, topping FROM inserted
            UNION
            SELECT id, topping FROM pizza.topping WHERE topping = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(topping) = topping {
            return Ok(topping);
        }

        tracing::debug!("Topping upsert raced a concurrent insert (attempt {})", attempt);
    }

    Err(AppError::UpsertRetriesExhausted("pizza.topping"))
}
