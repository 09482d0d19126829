//! Database-agnostic domain layer for Budgetflow.
//!
//! This crate defines the domain models, repository traits, and services for
//! the finance tracker. It knows nothing about PostgreSQL or Diesel: the
//! storage crate implements the repository traits defined here and converts
//! its errors into the [`errors`] taxonomy.
//!
//! ```text
//!   core (this crate, domain)
//!          │ traits
//!          ▼
//!   storage-postgres (Diesel + r2d2)
//!          │
//!          ▼
//!      PostgreSQL
//! ```

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod recurring;
pub mod users;
pub mod utils;

pub use errors::{DatabaseError, Error, Result, ValidationError};
