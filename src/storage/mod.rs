//! Storage layer for the NBA fantasy sync jobs
//!
//! This module provides a thin abstraction over the SQLite database:
//! - `models`: Data structures
//! - `schema`: Database connection, schema and transactions
//! - `queries`: CRUD operations used by the commands

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::PlayerListFilter;
pub use schema::PlayerDatabase;
