//! # clientele-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `CustomerRepository` port defined in `clientele-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `clientele-app` (for port traits) and `clientele-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod customer_repo;
pub mod error;
pub mod pool;

pub use customer_repo::SqliteCustomerRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
