use sqlx::{types::Json, PgPool};

use super::upsert::upsert_topping;
use crate::error::Result;
use crate::models::{normalize_topping, CustomerPreferences, Topping, ToppingWithCount};

/// Row shape of the preferences query; `toppings` is a `json_agg` column
#[derive(Debug, sqlx::FromRow)]
struct CustomerPreferencesRow {
    id: i32,
    email: String,
    toppings: Json<Vec<String>>,
}

impl From<CustomerPreferencesRow> for CustomerPreferences {
    fn from(row: CustomerPreferencesRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            toppings: row.toppings.0,
        }
    }
}

/// Read-side aggregation over customers and toppings
pub struct QueryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QueryRepository<'a> {
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every topping chosen by at least one customer, with its distinct customer count
    pub async fn toppings_with_counts(&self) -> Result<Vec<ToppingWithCount>> {
        let toppings = sqlx::query_as::<_, ToppingWithCount>(
            r#"
            SELECT t.id, t.topping, COUNT(DISTINCT c.id) AS customer_count
            FROM pizza.customer_topping ct
            JOIN pizza.topping t ON t.id = ct.topping_id
            JOIN pizza.customer c ON c.id = ct.customer_id
            GROUP BY t.id, t.topping
            ORDER BY t.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!("Loaded counts for {} toppings", toppings.len());

        Ok(toppings)
    }

    /// Every customer with at least one preference, with their topping names
    pub async fn customer_preferences(&self) -> Result<Vec<CustomerPreferences>> {
        let rows = sqlx::query_as::<_, CustomerPreferencesRow>(
            r#"
            SELECT c.id, c.email, json_agg(t.topping) AS toppings
            FROM pizza.customer c
            JOIN pizza.customer_topping ct ON c.id = ct.customer_id
            JOIN pizza.topping t ON t.id = ct.topping_id
            GROUP BY c.id, c.email
            ORDER BY c.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!("Loaded preferences for {} customers", rows.len());

        Ok(rows.into_iter().map(CustomerPreferences::from).collect())
    }

    /// Look up a topping by name, creating it if nobody has chosen it yet
    pub async fn get_or_create_topping(&self, name: &str) -> Result<Topping> {
        let mut conn = self.pool.acquire().await?;
        upsert_topping(&mut conn, &normalize_topping(name)).await
    }

    /// Round-trip a trivial statement to confirm the store is reachable
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool).await?;
        Ok(())
    }
}
