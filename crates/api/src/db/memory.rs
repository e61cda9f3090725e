//! In-memory repository backend.
//!
//! Implements all repository traits over a single `RwLock`-protected store,
//! providing fast access but no persistence across restarts. Selected via
//! `CLEMENTINE_STORE=memory` for local development; service tests use it
//! directly instead of a live database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use clementine_core::{NewOrderItem, Order, OrderId, OrderItem, OrderItemId, User, UserId};

use super::orders::{OrderDetails, OrderRecord};
use super::{OrderItemRepository, OrderRepository, RepositoryError, UserRepository};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    orders: Vec<OrderRecord>,
    items: Vec<OrderItem>,
    next_user_id: i32,
    next_order_id: i32,
    next_item_id: i32,
}

/// In-memory implementation of all repository traits.
///
/// Ids are assigned from 1 upward, matching the `SERIAL` columns of the
/// `PostgreSQL` backend. Referential integrity is not enforced; an order
/// whose owner is missing simply never joins in [`OrderRepository::get_details`].
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: &User) -> Result<UserId, RepositoryError> {
        let mut inner = self.inner.write().await;

        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        inner.next_user_id += 1;
        let id = UserId::new(inner.next_user_id);

        let mut stored = user.clone();
        stored.id = Some(id);
        inner.users.push(stored);

        Ok(id)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let inner = self.inner.read().await;
        // Insertion order is id order
        Ok(inner.users.clone())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn create(&self, order: &Order) -> Result<OrderId, RepositoryError> {
        let mut inner = self.inner.write().await;

        inner.next_order_id += 1;
        let id = OrderId::new(inner.next_order_id);

        inner.orders.push(OrderRecord {
            id,
            user_id: order.user_id,
            total: order.total,
            status: order.status,
        });

        Ok(id)
    }

    async fn get_details(&self, id: OrderId) -> Result<Option<OrderDetails>, RepositoryError> {
        let inner = self.inner.read().await;

        let Some(order) = inner.orders.iter().find(|o| o.id == id) else {
            return Ok(None);
        };

        // Inner join: an order without its owner yields no row
        let Some(user) = inner.users.iter().find(|u| u.id == Some(order.user_id)) else {
            return Ok(None);
        };

        Ok(Some(OrderDetails {
            order_id: order.id,
            user: user.name.clone(),
            total: order.total,
            status: order.status,
        }))
    }

    async fn get_by_user(&self, user_id: UserId) -> Result<Vec<OrderRecord>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderItemRepository for MemoryStore {
    async fn add_item(&self, item: &NewOrderItem) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().await;

        inner.next_item_id += 1;
        let id = OrderItemId::new(inner.next_item_id);

        inner.items.push(OrderItem {
            id,
            order_id: item.order_id,
            product_id: item.product_id,
            qty: item.qty,
            price: item.price,
        });

        Ok(())
    }

    async fn get_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}
