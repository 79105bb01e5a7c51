//! Store-level tests for registration and aggregate queries
//!
//! Each test gets a fresh, migrated database from `#[sqlx::test]`
//! (requires `DATABASE_URL`).

use std::collections::BTreeSet;

use sqlx::PgPool;

use pizza_preferences::db::{QueryRepository, RegistrationRepository};
use pizza_preferences::{Email, EmailValidator};

fn email(address: &str) -> Email {
    EmailValidator::default().parse(address).unwrap()
}

fn toppings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn preferences_of(pool: &PgPool, address: &str) -> Option<BTreeSet<String>> {
    QueryRepository::new(pool)
        .customer_preferences()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.email == address)
        .map(|c| c.toppings.into_iter().collect())
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_register_then_query_round_trip(pool: PgPool) {
    let repo = RegistrationRepository::new(&pool);

    repo.register(&email("foo@gmail.com"), &toppings(&["cheese", "pepperoni"]))
        .await
        .unwrap();
    repo.register(&email("bar@gmail.com"), &toppings(&["cheese"]))
        .await
        .unwrap();

    let counts = QueryRepository::new(&pool).toppings_with_counts().await.unwrap();
    let counts: Vec<(String, i64)> = counts
        .into_iter()
        .map(|t| (t.topping, t.customer_count))
        .collect();
    assert_eq!(
        counts,
        vec![("cheese".to_string(), 2), ("pepperoni".to_string(), 1)]
    );

    assert_eq!(
        preferences_of(&pool, "foo@gmail.com").await,
        Some(set(&["cheese", "pepperoni"]))
    );
    assert_eq!(
        preferences_of(&pool, "bar@gmail.com").await,
        Some(set(&["cheese"]))
    );
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_register_overwrites_instead_of_adding(pool: PgPool) {
    let repo = RegistrationRepository::new(&pool);
    let foo = email("foo@gmail.com");

    repo.register(&foo, &toppings(&["Cheese", "Pepperoni"]))
        .await
        .unwrap();
    repo.register(&foo, &toppings(&["pepperoni", "Onions"]))
        .await
        .unwrap();

    assert_eq!(
        preferences_of(&pool, "foo@gmail.com").await,
        Some(set(&["onions", "pepperoni"]))
    );

    // Cheese stays in the vocabulary even though nobody prefers it now
    let cheese = QueryRepository::new(&pool)
        .get_or_create_topping("cheese")
        .await
        .unwrap();
    let toppings_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pizza.topping")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(cheese.topping, "cheese");
    assert_eq!(toppings_rows, 3);
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_failed_register_leaves_previous_preferences(pool: PgPool) {
    let repo = RegistrationRepository::new(&pool);
    let foo = email("foo@gmail.com");

    repo.register(&foo, &toppings(&["cheese", "pepperoni"]))
        .await
        .unwrap();

    // Postgres rejects the NUL byte after the old links are already deleted
    let result = repo.register(&foo, &toppings(&["sausage", "bad\u{0}"])).await;
    assert!(result.is_err());

    assert_eq!(
        preferences_of(&pool, "foo@gmail.com").await,
        Some(set(&["cheese", "pepperoni"]))
    );

    let sausage_links: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM pizza.customer_topping ct
        JOIN pizza.topping t ON t.id = ct.topping_id
        WHERE t.topping = 'sausage'
        "#,
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(sausage_links, 0);
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_get_or_create_topping_normalizes_and_reuses(pool: PgPool) {
    let queries = QueryRepository::new(&pool);

    let created = queries.get_or_create_topping("Mushrooms").await.unwrap();
    let again = queries.get_or_create_topping("mushrooms").await.unwrap();
    let shouted = queries.get_or_create_topping("MUSHROOMS").await.unwrap();

    assert_eq!(created.topping, "mushrooms");
    assert_eq!(again, created);
    assert_eq!(shouted, created);
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_concurrent_registrations_converge(pool: PgPool) {
    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            // Half the tasks share one email, all share the topping vocabulary
            let address = if i % 2 == 0 {
                "shared@gmail.com".to_string()
            } else {
                format!("solo{i}@gmail.com")
            };
            RegistrationRepository::new(&pool)
                .register(&email(&address), &toppings(&["Sausage", "cheese", "Olives"]))
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pizza.customer")
        .fetch_one(&pool)
        .await
        .unwrap();
    let toppings_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pizza.topping")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(customers, 5);
    assert_eq!(toppings_rows, 3);

    assert_eq!(
        preferences_of(&pool, "shared@gmail.com").await,
        Some(set(&["cheese", "olives", "sausage"]))
    );

    let counts = QueryRepository::new(&pool).toppings_with_counts().await.unwrap();
    assert!(counts.iter().all(|t| t.customer_count == 5));
}

#[sqlx::test(migrator = "pizza_preferences::db::MIGRATOR")]
async fn test_ping(pool: PgPool) {
    QueryRepository::new(&pool).ping().await.unwrap();
}
