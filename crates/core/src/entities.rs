//! The two persisted entities: customers and the orders they place.
//!
//! Field names are part of the wire contract - they appear verbatim in JSON
//! request and response bodies and as column names in the SQLite schema.

use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, OrderId};

/// A customer who can place orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct Customer {
    /// Auto-assigned primary key, immutable after insert.
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// An order tied to exactly one customer.
///
/// `date` is stored verbatim in whatever format the caller supplied; the
/// service does not parse or normalize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct Order {
    /// Auto-assigned primary key.
    pub id: OrderId,
    pub date: String,
    pub status: String,
    /// References an existing `Customer` (foreign-key enforced at write time).
    pub customer_id: CustomerId,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_json_shape() {
        let customer = Customer {
            id: CustomerId::new(1),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "a@x.com".to_string(),
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "first_name": "Ana",
                "last_name": "Silva",
                "email": "a@x.com",
            })
        );
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order {
            id: OrderId::new(3),
            date: "22/05/1990".to_string(),
            status: "ok".to_string(),
            customer_id: CustomerId::new(1),
            amount: 50.0,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "date": "22/05/1990",
                "status": "ok",
                "customer_id": 1,
                "amount": 50.0,
            })
        );
    }
}
