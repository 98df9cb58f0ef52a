//! Customer route handlers.
//!
//! Validation is presence-only and short-circuits in a fixed field order
//! (`first_name`, `last_name`, `email`), so each request reports at most
//! one missing field.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use order_desk_core::CustomerId;

use crate::db::{CustomerRepository, OrderRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::success;

/// Customer create/update request body. All fields are required; `Option`
/// only so the handler can report which one is missing.
#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPayload {
    /// Presence check in the fixed field order.
    fn into_fields(self) -> Result<(String, String, String)> {
        let first_name = self
            .first_name
            .ok_or_else(|| AppError::missing_field("first_name"))?;
        let last_name = self
            .last_name
            .ok_or_else(|| AppError::missing_field("last_name"))?;
        let email = self.email.ok_or_else(|| AppError::missing_field("email"))?;
        Ok((first_name, last_name, email))
    }
}

/// List all customers.
///
/// GET /customers
///
/// An empty store yields a placeholder message instead of an empty list.
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let customers = CustomerRepository::new(state.pool()).list().await?;

    if customers.is_empty() {
        return Ok(Json(json!({ "customers": "no customers registered" })));
    }
    Ok(Json(json!({ "customers": customers })))
}

/// Create a customer.
///
/// POST /customers
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::no_data());
    };
    let (first_name, last_name, email) = payload.into_fields()?;

    CustomerRepository::new(state.pool())
        .create(&first_name, &last_name, &email)
        .await?;

    tracing::info!(email = %email, "Customer created");
    Ok(success())
}

/// Fetch a customer by id together with all orders referencing it.
///
/// GET /customer/{id}
///
/// An unknown id is reported as 400 "id not found". A customer without
/// orders carries a placeholder string in place of the order list.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let id = CustomerId::new(id);

    let customer = CustomerRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or(AppError::IdNotFound)?;

    let orders = OrderRepository::new(state.pool())
        .list_for_customer(id)
        .await?;

    if orders.is_empty() {
        return Ok(Json(json!({
            "customer": customer,
            "orders": "no orders registered",
        })));
    }
    Ok(Json(json!({ "customer": customer, "orders": orders })))
}

/// Replace all fields of a customer.
///
/// PUT /customer/{id}
///
/// Partial updates are not supported; all three fields are required. An id
/// matching zero rows still reports success (silent no-op).
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::no_data());
    };
    let (first_name, last_name, email) = payload.into_fields()?;

    CustomerRepository::new(state.pool())
        .update(CustomerId::new(id), &first_name, &last_name, &email)
        .await?;

    Ok(success())
}

/// Delete a customer.
///
/// DELETE /customer/{id}
///
/// Blocked while any order references the customer; the 400 response then
/// lists the blocking orders and the row is left in place.
#[instrument(skip_all)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let id = CustomerId::new(id);

    match CustomerRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(%id, "Customer deleted");
            Ok(success())
        }
        Err(RepositoryError::ReferentialIntegrity) => {
            let orders = OrderRepository::new(state.pool())
                .list_for_customer(id)
                .await?;
            Err(AppError::CustomerHasOrders(orders))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> CustomerPayload {
        CustomerPayload {
            first_name: first_name.map(String::from),
            last_name: last_name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_complete_payload_passes() {
        let fields = payload(Some("Ana"), Some("Silva"), Some("a@x.com"))
            .into_fields()
            .expect("all fields present");
        assert_eq!(
            fields,
            (
                "Ana".to_string(),
                "Silva".to_string(),
                "a@x.com".to_string()
            )
        );
    }

    #[test]
    fn test_validation_short_circuits_in_field_order() {
        // Both first_name and email missing: only first_name is reported.
        let err = payload(None, Some("Silva"), None)
            .into_fields()
            .expect_err("missing fields");
        assert_eq!(err.to_string(), "first_name not provided");

        let err = payload(Some("Ana"), None, None)
            .into_fields()
            .expect_err("missing fields");
        assert_eq!(err.to_string(), "last_name not provided");

        let err = payload(Some("Ana"), Some("Silva"), None)
            .into_fields()
            .expect_err("missing email");
        assert_eq!(err.to_string(), "email not provided");
    }
}
