//! SQLite storage implementation for Tallyfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tallyfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The manual balance record store and the tag registry
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!        core (domain, traits)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! Writes go through a single writer actor ([`WriteHandle`]); each job runs in
//! one `IMMEDIATE` transaction. Reads use the r2d2 pool directly.


pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod manual_balances;
pub mod tags;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use manual_balances::ManualBalanceRepository;
pub use tags::TagRepository;

// Re-export from tallyfolio-core for convenience
pub use tallyfolio_core::errors::{DatabaseError, Error, Result};
