//! Business logic services.
//!
//! Services validate input through the domain entities, then orchestrate the
//! repositories. Handlers stay thin: they parse the request and call one
//! service method.

pub mod orders;
pub mod users;

pub use orders::{CreateOrderRequest, OrderFull, OrderItemInput, OrderService};
pub use users::{CreateUserRequest, UserService};
