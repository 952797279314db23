//! Tallyfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the validation-and-mutation layer for manually
//! tracked balances. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod assets;
pub mod balances;
pub mod errors;
pub mod locations;
pub mod pricing;
pub mod tags;
pub mod utils;

// Re-export the types most callers need
pub use assets::AssetId;
pub use balances::{ManualBalance, ManualBalanceUpdate, NewManualBalance};
pub use locations::Location;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
