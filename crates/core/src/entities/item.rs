//! Order line items.
//!
//! Line items are plain data owned by their parent order. They carry no
//! invariants of their own and are never validated independently.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{OrderId, OrderItemId, ProductId};

/// A persisted order line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub qty: i32,
    pub price: Decimal,
}

/// A line item to insert; the id is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub qty: i32,
    pub price: Decimal,
}
