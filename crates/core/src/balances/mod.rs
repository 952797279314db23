//! Balances module - manually tracked balances and the balance manager.
//!
//! Every mutation runs as validate-then-commit: the whole batch is decoded
//! and checked against the current collection first, then applied to the
//! record store in a single call.

mod balances_decoder;
mod balances_errors;
mod balances_model;
mod balances_service;
mod balances_traits;
mod memory_repository;


pub use balances_decoder::{decode_amount, decode_asset};
pub use balances_errors::ManualBalanceError;
pub use balances_model::{BalanceAction, ManualBalance, ManualBalanceUpdate, NewManualBalance};
pub use balances_service::ManualBalanceService;
pub use balances_traits::{ManualBalanceRepositoryTrait, ManualBalanceServiceTrait};
pub use memory_repository::InMemoryManualBalanceRepository;
