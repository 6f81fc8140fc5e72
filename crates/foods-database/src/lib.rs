//! # foods-database
//!
//! PostgreSQL connection management and the concrete [`Repository`]
//! backings for every Latino Foods record type, plus an in-memory
//! backing used by tests and by the `memory` provider.
//!
//! [`Repository`]: foods_core::traits::Repository

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{FoodRepository, MemoryRepository, UserRepository};
