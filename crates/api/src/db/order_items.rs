//! Order item repository.

use async_trait::async_trait;
use sqlx::PgPool;

use clementine_core::{NewOrderItem, OrderId, OrderItem};

use super::RepositoryError;

/// Storage operations for order line items.
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Insert a line item under its order.
    async fn add_item(&self, item: &NewOrderItem) -> Result<(), RepositoryError>;

    /// Fetch all line items for an order, ordered by id.
    async fn get_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError>;
}

/// `PostgreSQL`-backed order item repository.
pub struct PgOrderItemRepository {
    pool: PgPool,
}

impl PgOrderItemRepository {
    /// Create a new order item repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderItemRepository for PgOrderItemRepository {
    async fn add_item(&self, item: &NewOrderItem) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, qty, price) VALUES ($1, $2, $3, $4)",
        )
        .bind(item.order_id)
        .bind(item.product_id)
        .bind(item.qty)
        .bind(item.price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, qty, price \
             FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
