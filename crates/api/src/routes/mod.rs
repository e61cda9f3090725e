//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (probes the database)
//!
//! # Users
//! POST /users               - Create user
//! GET  /users               - List users
//! GET  /users/{id}          - User by id
//! GET  /users/{id}/orders   - Orders belonging to a user
//!
//! # Orders
//! POST /orders              - Create order with line items
//! GET  /orders/{id}         - Order with owner name and items
//! ```

pub mod orders;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create).get(users::index))
        .route("/{id}", get(users::show))
        .route("/{id}/orders", get(users::orders))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/orders", order_routes())
}
