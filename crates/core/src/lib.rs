//! Clementine Core - Shared domain library.
//!
//! This crate provides the domain model used by the Clementine components:
//! - `api` - HTTP service exposing users, orders, and order items
//! - `cli` - Command-line tools for operations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and entities - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses
//! - [`entities`] - Domain entities with their invariants and the order
//!   status state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod types;

pub use entities::*;
pub use types::*;
