//! Order route handlers.
//!
//! Validation is presence-only and short-circuits in a fixed field order
//! (`date`, `status`, `customer_id`, `amount`).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use order_desk_core::{CustomerId, Order, OrderId};

use crate::db::{OrderRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::success;

/// Order create/update request body. All fields are required; `Option`
/// only so the handler can report which one is missing.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    pub date: Option<String>,
    pub status: Option<String>,
    pub customer_id: Option<i64>,
    pub amount: Option<f64>,
}

impl OrderPayload {
    /// Presence check in the fixed field order.
    fn into_fields(self) -> Result<(String, String, CustomerId, f64)> {
        let date = self.date.ok_or_else(|| AppError::missing_field("date"))?;
        let status = self
            .status
            .ok_or_else(|| AppError::missing_field("status"))?;
        let customer_id = self
            .customer_id
            .ok_or_else(|| AppError::missing_field("customer_id"))?;
        let amount = self
            .amount
            .ok_or_else(|| AppError::missing_field("amount"))?;
        Ok((date, status, CustomerId::new(customer_id), amount))
    }
}

/// List all orders.
///
/// GET /orders
///
/// An empty store yields a placeholder message instead of an empty list.
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let orders = OrderRepository::new(state.pool()).list().await?;

    if orders.is_empty() {
        return Ok(Json(json!({ "orders": "no orders registered" })));
    }
    Ok(Json(json!({ "orders": orders })))
}

/// Create an order.
///
/// POST /orders
///
/// A `customer_id` with no matching customer is rejected with 400
/// "customer id not registered" and nothing is persisted.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<OrderPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::no_data());
    };
    let (date, status, customer_id, amount) = payload.into_fields()?;

    OrderRepository::new(state.pool())
        .create(&date, &status, customer_id, amount)
        .await
        .map_err(reject_unknown_customer)?;

    tracing::info!(%customer_id, "Order created");
    Ok(success())
}

/// Fetch an order by id.
///
/// GET /order/{id}
///
/// An unknown id is reported as 400 "id not found".
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get(OrderId::new(id))
        .await?
        .ok_or(AppError::IdNotFound)?;

    Ok(Json(order))
}

/// Replace all fields of an order.
///
/// PUT /order/{id}
///
/// Partial updates are not supported; all four fields are required. An id
/// matching zero rows still reports success (silent no-op), but the new
/// `customer_id` must reference an existing customer.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<OrderPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::no_data());
    };
    let (date, status, customer_id, amount) = payload.into_fields()?;

    OrderRepository::new(state.pool())
        .update(OrderId::new(id), &date, &status, customer_id, amount)
        .await
        .map_err(reject_unknown_customer)?;

    Ok(success())
}

/// Delete an order.
///
/// DELETE /order/{id}
///
/// Unconditional; an unknown id still reports success.
#[instrument(skip_all)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    OrderRepository::new(state.pool())
        .delete(OrderId::new(id))
        .await?;

    Ok(success())
}

/// Map a foreign-key violation on an order write to the API error for an
/// unregistered customer id.
fn reject_unknown_customer(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::ReferentialIntegrity => AppError::UnknownCustomer,
        other => other.into(),
    }
}
