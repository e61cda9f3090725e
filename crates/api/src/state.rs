//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{
    MemoryStore, OrderItemRepository, OrderRepository, PgOrderItemRepository, PgOrderRepository,
    PgUserRepository, UserRepository,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// repositories of the selected backend. Handlers see only the repository
/// traits, so both backends serve the same routes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: Arc<dyn UserRepository>,
    orders: Arc<dyn OrderRepository>,
    order_items: Arc<dyn OrderItemRepository>,
    pool: Option<PgPool>,
}

impl AppState {
    /// Create state backed by `PostgreSQL` repositories.
    #[must_use]
    pub fn for_postgres(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                orders: Arc::new(PgOrderRepository::new(pool.clone())),
                order_items: Arc::new(PgOrderItemRepository::new(pool.clone())),
                pool: Some(pool),
            }),
        }
    }

    /// Create state backed by a single in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        let users: Arc<dyn UserRepository> = store.clone();
        let orders: Arc<dyn OrderRepository> = store.clone();
        let order_items: Arc<dyn OrderItemRepository> = store;

        Self {
            inner: Arc::new(AppStateInner {
                users,
                orders,
                order_items,
                pool: None,
            }),
        }
    }

    /// Get a reference to the user repository.
    #[must_use]
    pub fn users(&self) -> &dyn UserRepository {
        self.inner.users.as_ref()
    }

    /// Get a reference to the order repository.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderRepository {
        self.inner.orders.as_ref()
    }

    /// Get a reference to the order item repository.
    #[must_use]
    pub fn order_items(&self) -> &dyn OrderItemRepository {
        self.inner.order_items.as_ref()
    }

    /// Get the database connection pool, if the backend has one.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
