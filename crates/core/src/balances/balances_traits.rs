use async_trait::async_trait;

use super::balances_model::{ManualBalance, ManualBalanceUpdate, NewManualBalance};
use crate::errors::{Error, Result};

/// Persistence contract for manually tracked balances.
///
/// Every batch write is all-or-nothing: if any record in the batch cannot be
/// applied, none are. `get_all` returns records in insertion order.
#[async_trait]
pub trait ManualBalanceRepositoryTrait: Send + Sync {
    fn get_all(&self) -> Result<Vec<ManualBalance>>;

    fn contains(&self, label: &str) -> Result<bool>;

    /// Appends new records. Fails with `DatabaseError::UniqueViolation` if a
    /// label is already taken.
    async fn insert_all(&self, balances: Vec<ManualBalance>) -> Result<usize>;

    /// Replaces the record stored under `label`, keeping its position.
    /// Labels are immutable, so `balance.label` must equal `label`.
    async fn replace(&self, label: &str, balance: ManualBalance) -> Result<()> {
        if balance.label != label {
            return Err(Error::Unexpected(format!(
                "cannot rename manually tracked balance {} to {}",
                label, balance.label
            )));
        }
        self.replace_all(vec![balance]).await.map(|_| ())
    }

    /// Batch form of `replace`, keyed by each record's label. Fails with
    /// `DatabaseError::NotFound` if any label is absent.
    async fn replace_all(&self, balances: Vec<ManualBalance>) -> Result<usize>;

    /// Fails with `DatabaseError::NotFound` if any label is absent.
    async fn remove_all(&self, labels: Vec<String>) -> Result<usize>;
}

/// Operations of the balance manager.
///
/// Each write returns the full collection as it is after the write.
#[async_trait]
pub trait ManualBalanceServiceTrait: Send + Sync {
    fn get_manual_balances(&self) -> Result<Vec<ManualBalance>>;

    async fn add_manual_balances(
        &self,
        balances: Vec<NewManualBalance>,
    ) -> Result<Vec<ManualBalance>>;

    async fn edit_manual_balances(
        &self,
        updates: Vec<ManualBalanceUpdate>,
    ) -> Result<Vec<ManualBalance>>;

    async fn remove_manual_balances(&self, labels: Vec<String>) -> Result<Vec<ManualBalance>>;
}
