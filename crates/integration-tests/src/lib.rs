//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API (against Postgres or the in-memory backend)
//! CLEMENTINE_STORE=memory cargo run -p clementine-api
//!
//! # Run the integration tests against it
//! cargo test -p clementine-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_users` - User endpoints
//! - `api_orders` - Order endpoints
//!
//! All tests live under `tests/` and are `#[ignore]`d so `cargo test` stays
//! green without a running server. `CLEMENTINE_BASE_URL` overrides the target
//! (default `http://localhost:3000`).
