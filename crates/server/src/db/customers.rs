//! Customer repository for database operations.

use sqlx::SqlitePool;

use order_desk_core::{Customer, CustomerId};

use super::RepositoryError;

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new customer row.
    ///
    /// The id is auto-assigned by the store. No constraints currently apply
    /// to customer inserts, so any failure is a plain database error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO customer (first_name, last_name, email)
            VALUES (?, ?, ?)
            ",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get all customers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, email
            FROM customer
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, email
            FROM customer
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    /// Replace all fields of a customer row.
    ///
    /// Unconditional update; an id matching zero rows is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE customer
            SET first_name = ?,
                last_name = ?,
                email = ?
            WHERE id = ?
            ",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete a customer row.
    ///
    /// The store's foreign-key check rejects the delete while any order
    /// still references the customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ReferentialIntegrity` if orders still
    /// reference the customer, `RepositoryError::Database` otherwise.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM customer
            WHERE id = ?
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(())
    }
}
