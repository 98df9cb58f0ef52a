//! Order Desk Core - Shared domain types.
//!
//! This crate provides the types shared between the server binary and the
//! integration tests:
//!
//! - [`id`] - Newtype wrappers for type-safe entity IDs
//! - [`entities`] - The `Customer` and `Order` records
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database support (sqlx column mappings) is gated behind the `sqlite`
//! feature so the types stay lightweight elsewhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod id;

pub use entities::{Customer, Order};
pub use id::{CustomerId, OrderId};
