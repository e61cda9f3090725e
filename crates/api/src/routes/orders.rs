//! Order routes.
//!
//! JSON endpoints for creating and reading orders with their line items.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use clementine_core::OrderId;

use crate::error::Result;
use crate::services::{CreateOrderRequest, OrderFull, OrderService};
use crate::state::AppState;

/// Response body for a created order.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub id: OrderId,
    pub message: &'static str,
}

/// Create an order with its line items.
///
/// `POST /orders`
///
/// # Errors
///
/// Returns 400 if the user id or total is missing, or the total is not
/// positive.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderCreated>> {
    let service = OrderService::new(state.orders(), state.order_items());
    let id = service.create_order(req).await?;

    Ok(Json(OrderCreated {
        id,
        message: "Order Created",
    }))
}

/// Fetch an order with its owner's name and line items.
///
/// `GET /orders/{id}`
///
/// # Errors
///
/// Returns 404 if no order has the id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderFull>> {
    let service = OrderService::new(state.orders(), state.order_items());
    Ok(Json(service.get_order_full(id).await?))
}
