//! PostgreSQL persistence for stores using Diesel with `diesel-async`.
//!
//! Row structs and the table definition stay private; the domain only sees
//! [`DieselStoreRepository`] through the `StoreRepository` port.
//!
//! ```ignore
//! use store_locator::outbound::persistence::{DbPool, DieselStoreRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/stores")).await?;
//! let repo = DieselStoreRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_store_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_store_repository::DieselStoreRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
