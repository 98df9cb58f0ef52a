//! Order repository for database operations.

use sqlx::SqlitePool;

use order_desk_core::{CustomerId, Order, OrderId};

use super::RepositoryError;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new order row.
    ///
    /// `date` is stored verbatim; the store does not parse it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ReferentialIntegrity` if `customer_id`
    /// does not reference an existing customer, `RepositoryError::Database`
    /// for other failures.
    pub async fn create(
        &self,
        date: &str,
        status: &str,
        customer_id: CustomerId,
        amount: f64,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO order_record (date, status, customer_id, amount)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(date)
        .bind(status)
        .bind(customer_id)
        .bind(amount)
        .execute(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(())
    }

    /// Get all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, date, status, customer_id, amount
            FROM order_record
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get all orders placed by one customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, date, status, customer_id, amount
            FROM order_record
            WHERE customer_id = ?
            ORDER BY id ASC
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, date, status, customer_id, amount
            FROM order_record
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Replace all fields of an order row.
    ///
    /// Unconditional update; an id matching zero rows is not an error. The
    /// foreign-key check still applies to the new `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ReferentialIntegrity` if `customer_id`
    /// does not reference an existing customer, `RepositoryError::Database`
    /// for other failures.
    pub async fn update(
        &self,
        id: OrderId,
        date: &str,
        status: &str,
        customer_id: CustomerId,
        amount: f64,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE order_record
            SET date = ?,
                status = ?,
                customer_id = ?,
                amount = ?
            WHERE id = ?
            ",
        )
        .bind(date)
        .bind(status)
        .bind(customer_id)
        .bind(amount)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(())
    }

    /// Delete an order row.
    ///
    /// No existence or integrity check; deleting an unknown id affects zero
    /// rows and succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM order_record
            WHERE id = ?
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
