//! Database operations for the Order Desk SQLite store.
//!
//! # Tables
//!
//! - `customer` - `id`, `first_name`, `last_name`, `email`
//! - `order_record` - `id`, `date`, `status`, `customer_id`, `amount`
//!   (`customer_id` carries a foreign key to `customer.id`)
//!
//! The order table is named `order_record` because `order` is a reserved
//! word in SQL; JSON field names are unaffected.
//!
//! # Integrity
//!
//! Referential integrity is enforced by the store itself: every pooled
//! connection runs with `PRAGMA foreign_keys = ON`, so inserting an order
//! for an unknown customer or deleting a customer that still has orders
//! fails at write time with [`RepositoryError::ReferentialIntegrity`].
//! All statements are parameterized; caller-supplied values are never
//! interpolated into SQL text.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod customers;
pub mod orders;

pub use customers::CustomerRepository;
pub use orders::OrderRepository;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write would violate the order -> customer foreign key.
    #[error("referential integrity violation")]
    ReferentialIntegrity,
}

impl RepositoryError {
    /// Classify an sqlx error, separating foreign-key violations from the rest.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_foreign_key_violation()
        {
            return Self::ReferentialIntegrity;
        }
        Self::Database(err)
    }
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The database file is created if missing and foreign-key enforcement is
/// enabled on every connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Bootstrap the schema.
///
/// Idempotent; runs at startup before the server accepts connections so a
/// freshly created database file gets its tables before first use.
///
/// # Errors
///
/// Returns `sqlx::Error` if either DDL statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS customer (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS order_record (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            status TEXT NOT NULL,
            customer_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customer (id)
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use order_desk_core::{CustomerId, OrderId};

    use super::*;

    /// In-memory pool limited to one connection so every statement sees the
    /// same database.
    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("in-memory pool");
        init_schema(&pool).await.expect("schema");
        pool
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.expect("second run succeeds");
    }

    #[tokio::test]
    async fn test_customer_crud_round_trip() {
        let pool = test_pool().await;
        let repo = CustomerRepository::new(&pool);

        repo.create("Ana", "Silva", "a@x.com").await.expect("insert");
        let customers = repo.list().await.expect("list");
        assert_eq!(customers.len(), 1);

        let id = customers.first().expect("one row").id;
        repo.update(id, "Ana", "Souza", "a@x.com")
            .await
            .expect("update");
        let customer = repo.get(id).await.expect("get").expect("present");
        assert_eq!(customer.last_name, "Souza");

        repo.delete(id).await.expect("delete");
        assert!(repo.get(id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn test_orphan_order_insert_is_referential_integrity() {
        let pool = test_pool().await;

        let err = OrderRepository::new(&pool)
            .create("22/05/1990", "ok", CustomerId::new(999), 50.0)
            .await
            .expect_err("no customer 999");
        assert!(matches!(err, RepositoryError::ReferentialIntegrity));

        // Nothing persisted.
        assert!(OrderRepository::new(&pool).list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn test_customer_delete_blocked_by_orders() {
        let pool = test_pool().await;
        let customers = CustomerRepository::new(&pool);
        let orders = OrderRepository::new(&pool);

        customers.create("Ana", "Silva", "a@x.com").await.expect("insert");
        let id = customers
            .list()
            .await
            .expect("list")
            .first()
            .expect("one row")
            .id;
        orders
            .create("22/05/1990", "ok", id, 50.0)
            .await
            .expect("order insert");

        let err = customers.delete(id).await.expect_err("blocked");
        assert!(matches!(err, RepositoryError::ReferentialIntegrity));
        // Customer row remains.
        assert!(customers.get(id).await.expect("get").is_some());

        // Removing the order unblocks the delete.
        let order_id = orders
            .list_for_customer(id)
            .await
            .expect("list")
            .first()
            .expect("one order")
            .id;
        orders.delete(order_id).await.expect("order delete");
        customers.delete(id).await.expect("delete succeeds");
    }

    #[tokio::test]
    async fn test_updates_and_deletes_on_missing_ids_are_silent() {
        let pool = test_pool().await;

        CustomerRepository::new(&pool)
            .update(CustomerId::new(42), "A", "B", "c@d.com")
            .await
            .expect("zero-row update succeeds");
        OrderRepository::new(&pool)
            .delete(OrderId::new(42))
            .await
            .expect("zero-row delete succeeds");
    }
}
