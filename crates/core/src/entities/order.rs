//! Order entity and its status state machine.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::ValidationError;
use crate::types::{OrderStatus, UserId};

/// An order placed by a user.
///
/// Construction enforces a positive total and defaults the status to
/// [`OrderStatus::New`]. Status changes go through [`update_status`],
/// [`cancel`], and [`complete`], which enforce that `COMPLETED` and
/// `CANCELLED` are sticky: from a terminal state the only accepted write is
/// the same state again, so client retries stay idempotent.
///
/// Serializes to `{userId, total, status}`.
///
/// [`update_status`]: Order::update_status
/// [`cancel`]: Order::cancel
/// [`complete`]: Order::complete
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_id: UserId,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl Order {
    /// Create a new order in the creation default status, `NEW`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveTotal`] if `total <= 0`.
    pub fn new(user_id: UserId, total: Decimal) -> Result<Self, ValidationError> {
        Self::with_status(user_id, total, OrderStatus::default())
    }

    /// Create an order in an explicit status (e.g. when rebuilding one from
    /// stored fields).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveTotal`] if `total <= 0`.
    pub fn with_status(
        user_id: UserId,
        total: Decimal,
        status: OrderStatus,
    ) -> Result<Self, ValidationError> {
        if total <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTotal);
        }

        Ok(Self {
            user_id,
            total,
            status,
        })
    }

    /// Re-check the order invariants.
    ///
    /// Fields are public, so a holder can move the order into an illegal
    /// state between construction and persistence. Callers that assign
    /// `total` directly should re-validate before writing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveTotal`] if `total <= 0`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTotal);
        }
        Ok(())
    }

    /// Transition to `new_status`.
    ///
    /// From `NEW` or `PROCESSING` any target is accepted. A terminal status
    /// accepts only itself.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UpdateCancelled`] or
    /// [`ValidationError::UpdateCompleted`] when a terminal order is asked to
    /// change to a different status. The status is left untouched on error.
    pub fn update_status(&mut self, new_status: OrderStatus) -> Result<(), ValidationError> {
        if self.status == OrderStatus::Cancelled && new_status != OrderStatus::Cancelled {
            return Err(ValidationError::UpdateCancelled);
        }

        if self.status == OrderStatus::Completed && new_status != OrderStatus::Completed {
            return Err(ValidationError::UpdateCompleted);
        }

        self.status = new_status;
        Ok(())
    }

    /// Cancel the order. Idempotent on an already cancelled order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CancelCompleted`] if the order is
    /// `COMPLETED`.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        if self.status == OrderStatus::Completed {
            return Err(ValidationError::CancelCompleted);
        }

        self.status = OrderStatus::Cancelled;
        Ok(())
    }

    /// Complete the order. Idempotent on an already completed order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CompleteCancelled`] if the order is
    /// `CANCELLED`.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        if self.status == OrderStatus::Cancelled {
            return Err(ValidationError::CompleteCancelled);
        }

        self.status = OrderStatus::Completed;
        Ok(())
    }

    /// Whether the order has reached `COMPLETED`.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, OrderStatus::Completed)
    }

    /// Whether the order has reached `CANCELLED`.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.status, OrderStatus::Cancelled)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order_in(status: OrderStatus) -> Order {
        Order::with_status(UserId::new(1), Decimal::from(50), status).unwrap()
    }

    #[test]
    fn test_new_defaults_to_new_status() {
        let order = Order::new(UserId::new(1), Decimal::from(50)).unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert!(!order.is_completed());
        assert!(!order.is_cancelled());
    }

    #[test]
    fn test_new_rejects_non_positive_total() {
        let zero = Order::new(UserId::new(1), Decimal::ZERO);
        assert_eq!(zero.unwrap_err(), ValidationError::NonPositiveTotal);

        let negative = Order::new(UserId::new(1), Decimal::from(-10));
        assert_eq!(negative.unwrap_err(), ValidationError::NonPositiveTotal);
    }

    #[test]
    fn test_with_status_rejects_non_positive_total() {
        let err = Order::with_status(UserId::new(1), Decimal::ZERO, OrderStatus::Processing);
        assert_eq!(err.unwrap_err(), ValidationError::NonPositiveTotal);
    }

    #[test]
    fn test_validate_catches_direct_total_mutation() {
        let mut order = order_in(OrderStatus::New);
        assert!(order.validate().is_ok());

        order.total = Decimal::from(-5);
        assert_eq!(order.validate().unwrap_err(), ValidationError::NonPositiveTotal);
    }

    #[test]
    fn test_update_status_from_non_terminal_allows_any_target() {
        for from in [OrderStatus::New, OrderStatus::Processing] {
            for to in OrderStatus::ALL {
                let mut order = order_in(from);
                order.update_status(to).unwrap();
                assert_eq!(order.status, to);
            }
        }
    }

    #[test]
    fn test_update_status_same_state_on_terminal_is_idempotent() {
        let mut completed = order_in(OrderStatus::Completed);
        completed.update_status(OrderStatus::Completed).unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);

        let mut cancelled = order_in(OrderStatus::Cancelled);
        cancelled.update_status(OrderStatus::Cancelled).unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_update_status_rejects_leaving_completed() {
        for to in [OrderStatus::New, OrderStatus::Processing, OrderStatus::Cancelled] {
            let mut order = order_in(OrderStatus::Completed);
            let err = order.update_status(to).unwrap_err();
            assert_eq!(err, ValidationError::UpdateCompleted);
            assert_eq!(err.to_string(), "cannot update a completed order");
            assert_eq!(order.status, OrderStatus::Completed);
        }
    }

    #[test]
    fn test_update_status_rejects_leaving_cancelled() {
        for to in [OrderStatus::New, OrderStatus::Processing, OrderStatus::Completed] {
            let mut order = order_in(OrderStatus::Cancelled);
            let err = order.update_status(to).unwrap_err();
            assert_eq!(err, ValidationError::UpdateCancelled);
            assert_eq!(err.to_string(), "cannot update a cancelled order");
            assert_eq!(order.status, OrderStatus::Cancelled);
        }
    }

    #[test]
    fn test_cancel_succeeds_from_non_completed_states() {
        for from in [OrderStatus::New, OrderStatus::Processing, OrderStatus::Cancelled] {
            let mut order = order_in(from);
            order.cancel().unwrap();
            assert_eq!(order.status, OrderStatus::Cancelled);
            assert!(order.is_cancelled());
        }
    }

    #[test]
    fn test_cancel_rejects_completed() {
        let mut order = order_in(OrderStatus::Completed);
        let err = order.cancel().unwrap_err();
        assert_eq!(err, ValidationError::CancelCompleted);
        assert_eq!(err.to_string(), "cannot cancel a completed order");
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_complete_succeeds_from_non_cancelled_states() {
        for from in [OrderStatus::New, OrderStatus::Processing, OrderStatus::Completed] {
            let mut order = order_in(from);
            order.complete().unwrap();
            assert_eq!(order.status, OrderStatus::Completed);
            assert!(order.is_completed());
        }
    }

    #[test]
    fn test_complete_rejects_cancelled() {
        let mut order = order_in(OrderStatus::Cancelled);
        let err = order.complete().unwrap_err();
        assert_eq!(err, ValidationError::CompleteCancelled);
        assert_eq!(err.to_string(), "cannot complete a cancelled order");
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_completed_order_survives_cancel_attempt() {
        // New order -> complete -> cancel must fail and leave it completed
        let mut order = Order::new(UserId::new(1), Decimal::from(50)).unwrap();
        assert_eq!(order.status, OrderStatus::New);

        order.complete().unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        assert!(order.cancel().is_err());
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.is_completed());
    }

    #[test]
    fn test_serialize_shape() {
        let order = Order::new(UserId::new(7), Decimal::from(50)).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 7,
                "total": "50",
                "status": "NEW",
            })
        );
    }
}
