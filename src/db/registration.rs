use sqlx::PgPool;

use super::upsert::{upsert_customer, upsert_topping};
use crate::error::Result;
use crate::models::normalize_toppings;
use crate::validation::Email;

/// Writes customer registrations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a customer and overwrite their topping preferences.
    ///
    /// The customer row is created on first use and then locked, so concurrent
    /// registrations for one email apply one after the other. Existing preference links are
    /// deleted and rebuilt from `toppings` (normalized, duplicates collapsed), so
    /// an empty list clears them. Everything runs in one transaction; on any
    /// error the transaction is dropped and rolled back.
    pub async fn register(&self, email: &Email, toppings: &[String]) -> Result<()> {
        let toppings = normalize_toppings(toppings);

        let mut tx = self.pool.begin().await?;

        let customer_id = upsert_customer(&mut tx, email.as_str()).await?;

        // Serialize registrations for the same customer until commit
        sqlx::query("SELECT id FROM pizza.customer WHERE id = $1 FOR UPDATE")
            .bind(customer_id)
            .execute(&mut *tx)
            .await?;

        let cleared = sqlx::query("DELETE FROM pizza.customer_topping WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for name in &toppings {
            let topping = upsert_topping(&mut tx, name).await?;

            sqlx::query(
                r#"
                INSERT INTO pizza.customer_topping (customer_id, topping_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(customer_id)
            .bind(topping.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Registered customer {} (id {}): {} toppings, {} previous links replaced",
            email,
            customer_id,
            toppings.len(),
            cleared
        );

        Ok(())
    }
}
