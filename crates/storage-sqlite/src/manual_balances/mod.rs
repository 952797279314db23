//! SQLite storage implementation for manually tracked balances.

mod model;
mod repository;

pub use model::{ManualBalanceChangesDB, ManualBalanceDB, NewManualBalanceDB};
pub use repository::ManualBalanceRepository;
