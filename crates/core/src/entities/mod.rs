//! Domain entities with their invariants.
//!
//! Entities validate on construction and on every mutation, so a held value
//! is always in a legal state. Failures are reported through
//! [`ValidationError`] rather than panics.

pub mod item;
pub mod order;
pub mod user;

pub use item::{NewOrderItem, OrderItem};
pub use order::Order;
pub use user::User;

use crate::types::{EmailError, ParseOrderStatusError};

/// Validation failures raised by entity constructors and mutations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The email failed format validation.
    #[error(transparent)]
    Email(#[from] EmailError),
    /// The status string is not one of the enumerated values.
    #[error(transparent)]
    Status(#[from] ParseOrderStatusError),
    /// An order was submitted without a user id.
    #[error("user id is required")]
    MissingUserId,
    /// An order was submitted without a total.
    #[error("total is required")]
    MissingTotal,
    /// The order total must be strictly greater than zero.
    #[error("total must be positive")]
    NonPositiveTotal,
    /// A cancelled order only accepts the same-state write.
    #[error("cannot update a cancelled order")]
    UpdateCancelled,
    /// A completed order only accepts the same-state write.
    #[error("cannot update a completed order")]
    UpdateCompleted,
    /// A completed order cannot be cancelled.
    #[error("cannot cancel a completed order")]
    CancelCompleted,
    /// A cancelled order cannot be completed.
    #[error("cannot complete a cancelled order")]
    CompleteCancelled,
}
