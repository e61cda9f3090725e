//! Order repository.
//!
//! Status is stored as text and re-parsed on read. A row holding a status
//! outside [`clementine_core::OrderStatus`] surfaces as `DataCorruption`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use clementine_core::{Order, OrderId, OrderStatus, UserId};

use super::RepositoryError;

/// A stored order header, as returned by list queries.
///
/// Serializes with its column names, unlike the domain entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub user_id: UserId,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// An order header joined with its owner's name.
///
/// `user` is the owner's display name, which may be null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: OrderId,
    pub user: Option<String>,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Storage operations for order headers.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order header and return the generated id.
    async fn create(&self, order: &Order) -> Result<OrderId, RepositoryError>;

    /// Fetch an order joined with its owner's name, or `None` if absent.
    async fn get_details(&self, id: OrderId) -> Result<Option<OrderDetails>, RepositoryError>;

    /// Fetch all orders belonging to a user, ordered by id.
    async fn get_by_user(&self, user_id: UserId) -> Result<Vec<OrderRecord>, RepositoryError>;
}

/// `PostgreSQL`-backed order repository.
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new order repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    user_id: i32,
    total: Decimal,
    status: String,
}

impl OrderRow {
    fn into_record(self) -> Result<OrderRecord, RepositoryError> {
        Ok(OrderRecord {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            total: self.total,
            status: parse_status(&self.status)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DetailsRow {
    order_id: i32,
    user_name: Option<String>,
    total: Decimal,
    status: String,
}

fn parse_status(raw: &str) -> Result<OrderStatus, RepositoryError> {
    raw.parse().map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
    })
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &Order) -> Result<OrderId, RepositoryError> {
        let id = sqlx::query_scalar::<_, OrderId>(
            "INSERT INTO orders (user_id, total, status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(order.user_id)
        .bind(order.total)
        .bind(order.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_details(&self, id: OrderId) -> Result<Option<OrderDetails>, RepositoryError> {
        let row = sqlx::query_as::<_, DetailsRow>(
            "SELECT o.id AS order_id, u.name AS user_name, o.total, o.status \
             FROM orders o \
             JOIN users u ON o.user_id = u.id \
             WHERE o.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(OrderDetails {
                order_id: OrderId::new(r.order_id),
                user: r.user_name,
                total: r.total,
                status: parse_status(&r.status)?,
            })),
            None => Ok(None),
        }
    }

    async fn get_by_user(&self, user_id: UserId) -> Result<Vec<OrderRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, user_id, total, status FROM orders WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_record).collect()
    }
}
