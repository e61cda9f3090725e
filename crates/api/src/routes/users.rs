//! User routes.
//!
//! JSON endpoints for creating and reading users.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use clementine_core::{User, UserId};

use crate::db::OrderRecord;
use crate::error::Result;
use crate::services::{CreateUserRequest, OrderService, UserService};
use crate::state::AppState;

/// Response body for a created user.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub id: UserId,
    pub message: &'static str,
}

/// Create a user.
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 for validation failures and 409 for a duplicate email.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreated>)> {
    let service = UserService::new(state.users());
    let id = service.create_user(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            id,
            message: "User Created",
        }),
    ))
}

/// List all users.
///
/// `GET /users`
///
/// # Errors
///
/// Returns 500 if the repository fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let service = UserService::new(state.users());
    Ok(Json(service.list_users().await?))
}

/// Fetch one user by id.
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has the id.
pub async fn show(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<User>> {
    let service = UserService::new(state.users());
    Ok(Json(service.get_user(id).await?))
}

/// List the orders belonging to a user.
///
/// `GET /users/{id}/orders`
///
/// # Errors
///
/// Returns 500 if the repository fails.
pub async fn orders(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Vec<OrderRecord>>> {
    let service = OrderService::new(state.orders(), state.order_items());
    Ok(Json(service.orders_for_user(id).await?))
}
