//! PostgreSQL storage implementation for Budgetflow.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with PostgreSQL. It implements the repository traits defined in
//! `budgetflow-core` and contains:
//! - Database connection pooling (bounded, blocking acquire)
//! - Embedded Diesel migrations that create the schema idempotently
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!      core (domain)
//!           │
//!           ▼
//!  storage-postgres (this crate)
//!           │
//!           ▼
//!      PostgreSQL
//! ```
//!
//! # Lifecycle
//!
//! Call [`create_pool`] once per database at startup, then [`run_migrations`]
//! with the fresh pool. Repositories clone the pool handle and borrow
//! connections per call; every borrow is returned when the guard drops, on
//! every exit path. [`shutdown_pool`] releases the startup handle.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod expenses;
pub mod recurring;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, run_migrations, shutdown_pool, DbConfig, DbConnection, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from budgetflow-core for convenience
pub use budgetflow_core::errors::{DatabaseError, Error, Result};
