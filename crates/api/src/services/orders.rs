//! Order service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use clementine_core::{NewOrderItem, Order, OrderId, OrderItem, ProductId, UserId, ValidationError};

use crate::db::{OrderDetails, OrderItemRepository, OrderRecord, OrderRepository};
use crate::error::AppError;

/// One line item in a create-order request.
#[derive(Debug, Deserialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub qty: i32,
    pub price: Decimal,
}

/// Request body for creating an order.
///
/// `user_id` and `total` are optional at the serde layer; the domain entity
/// decides which are actually required, so a missing field reports a
/// validation message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Option<UserId>,
    pub total: Option<Decimal>,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// Full order payload: the joined header plus its line items.
#[derive(Debug, Serialize)]
pub struct OrderFull {
    #[serde(flatten)]
    pub details: OrderDetails,
    pub items: Vec<OrderItem>,
}

/// Order management service.
pub struct OrderService<'a> {
    orders: &'a dyn OrderRepository,
    order_items: &'a dyn OrderItemRepository,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(
        orders: &'a dyn OrderRepository,
        order_items: &'a dyn OrderItemRepository,
    ) -> Self {
        Self {
            orders,
            order_items,
        }
    }

    /// Validate and store an order with its line items, returning the order id.
    ///
    /// The header and items are written sequentially without a transaction; a
    /// failed item insert leaves the header and earlier items in place.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the user id is missing, or if the
    /// total is missing or not positive. Nothing is written in that case.
    #[instrument(skip(self, req), fields(user_id = ?req.user_id))]
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<OrderId, AppError> {
        let user_id = req.user_id.ok_or(ValidationError::MissingUserId)?;
        let total = req.total.ok_or(ValidationError::MissingTotal)?;
        let order = Order::new(user_id, total)?;

        let order_id = self.orders.create(&order).await?;

        for item in &req.items {
            self.order_items
                .add_item(&NewOrderItem {
                    order_id,
                    product_id: item.product_id,
                    qty: item.qty,
                    price: item.price,
                })
                .await?;
        }

        tracing::info!(order_id = order_id.as_i32(), "Order created");
        Ok(order_id)
    }

    /// Fetch an order's joined header and its line items.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no order has the id.
    pub async fn get_order_full(&self, id: OrderId) -> Result<OrderFull, AppError> {
        let details = self
            .orders
            .get_details(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
        let items = self.order_items.get_items(id).await?;

        Ok(OrderFull { details, items })
    }

    /// List all orders belonging to a user, ordered by id.
    ///
    /// Unknown users simply have no orders; no existence check is made.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the query fails.
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<OrderRecord>, AppError> {
        Ok(self.orders.get_by_user(user_id).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clementine_core::{OrderStatus, User};
    use serde_json::json;

    use crate::db::{MemoryStore, UserRepository};

    use super::*;

    async fn store_with_user(name: &str, email: &str) -> (MemoryStore, UserId) {
        let store = MemoryStore::new();
        let user = User::new(Some(name.to_owned()), email, None).unwrap();
        let id = UserRepository::create(&store, &user).await.unwrap();
        (store, id)
    }

    fn request(user_id: UserId, total: i64, items: Vec<OrderItemInput>) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: Some(user_id),
            total: Some(Decimal::new(total, 0)),
            items,
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch_full_order() {
        let (store, user_id) = store_with_user("Ada", "ada@example.com").await;
        let service = OrderService::new(&store, &store);

        let order_id = service
            .create_order(request(
                user_id,
                30,
                vec![OrderItemInput {
                    product_id: ProductId::new(9),
                    qty: 2,
                    price: Decimal::new(15, 0),
                }],
            ))
            .await
            .unwrap();

        let full = service.get_order_full(order_id).await.unwrap();
        assert_eq!(full.details.order_id, order_id);
        assert_eq!(full.details.user.as_deref(), Some("Ada"));
        assert_eq!(full.details.total, Decimal::new(30, 0));
        assert_eq!(full.details.status, OrderStatus::New);
        assert_eq!(full.items.len(), 1);
        assert_eq!(full.items[0].product_id.as_i32(), 9);
        assert_eq!(full.items[0].qty, 2);
    }

    #[tokio::test]
    async fn test_full_order_serializes_flat() {
        let (store, user_id) = store_with_user("Ada", "ada@example.com").await;
        let service = OrderService::new(&store, &store);

        let order_id = service
            .create_order(request(
                user_id,
                30,
                vec![OrderItemInput {
                    product_id: ProductId::new(9),
                    qty: 2,
                    price: Decimal::new(15, 0),
                }],
            ))
            .await
            .unwrap();
        let full = service.get_order_full(order_id).await.unwrap();

        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            json!({
                "orderId": 1,
                "user": "Ada",
                "total": "30",
                "status": "NEW",
                "items": [
                    {"id": 1, "order_id": 1, "product_id": 9, "qty": 2, "price": "15"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_create_order_missing_user_id() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store, &store);

        let err = service
            .create_order(CreateOrderRequest {
                user_id: None,
                total: Some(Decimal::new(30, 0)),
                items: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingUserId)
        ));
    }

    #[tokio::test]
    async fn test_create_order_missing_total() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store, &store);

        let err = service
            .create_order(CreateOrderRequest {
                user_id: Some(UserId::new(1)),
                total: None,
                items: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingTotal)
        ));
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_positive_total() {
        let (store, user_id) = store_with_user("Ada", "ada@example.com").await;
        let service = OrderService::new(&store, &store);

        let err = service
            .create_order(request(user_id, -5, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::NonPositiveTotal)
        ));

        // Validation failed before any write
        assert!(service.orders_for_user(user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store, &store);

        let err = service.get_order_full(OrderId::new(99)).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Order not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_orders_for_user() {
        let (store, user_id) = store_with_user("Ada", "ada@example.com").await;
        let service = OrderService::new(&store, &store);

        service
            .create_order(request(user_id, 10, vec![]))
            .await
            .unwrap();
        service
            .create_order(request(user_id, 20, vec![]))
            .await
            .unwrap();

        let orders = service.orders_for_user(user_id).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].total, Decimal::new(10, 0));
        assert_eq!(orders[1].total, Decimal::new(20, 0));

        let none = service.orders_for_user(UserId::new(99)).await.unwrap();
        assert!(none.is_empty());
    }
}
