//! Unified error handling for the HTTP surface.
//!
//! Provides a unified `AppError` type mapping the two API error kinds
//! (validation failures and referential-integrity violations) to the wire
//! contract: HTTP 400 with an `{"Error": "<message>"}` body. All route
//! handlers return `Result<T, AppError>`.
//!
//! Note the contract deliberately uses 400 (not 404) for unknown ids, and
//! reports a single error per request.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use order_desk_core::Order;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing from the request body.
    #[error("{0}")]
    Validation(String),

    /// An id-scoped lookup matched no row.
    #[error("id not found")]
    IdNotFound,

    /// An order insert/update referenced a customer that does not exist.
    #[error("customer id not registered")]
    UnknownCustomer,

    /// A customer delete was blocked by orders still referencing it.
    #[error("customer has registered orders")]
    CustomerHasOrders(Vec<Order>),

    /// Unclassified store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// Validation error for a missing request body.
    #[must_use]
    pub fn no_data() -> Self {
        Self::Validation("no data provided".to_string())
    }

    /// Validation error for a missing required field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{field} not provided"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(_) | Self::IdNotFound | Self::UnknownCustomer => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "Error": self.to_string() })),
            )
                .into_response(),
            Self::CustomerHasOrders(ref orders) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "Error": self.to_string(), "orders": orders })),
            )
                .into_response(),
            Self::Repository(err) => {
                // Don't expose internal error details to clients
                tracing::error!(error = %err, "Request error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "Error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
