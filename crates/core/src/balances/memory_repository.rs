//! In-process record store for manually tracked balances.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;

use super::balances_model::ManualBalance;
use super::balances_traits::ManualBalanceRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};

/// Keeps balances in a vector, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryManualBalanceRepository {
    balances: RwLock<Vec<ManualBalance>>,
}

impl InMemoryManualBalanceRepository {
    pub fn with_balances(balances: Vec<ManualBalance>) -> Self {
        Self {
            balances: RwLock::new(balances),
        }
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Unexpected("manual balance store lock poisoned".to_string())
}

#[async_trait]
impl ManualBalanceRepositoryTrait for InMemoryManualBalanceRepository {
    fn get_all(&self) -> Result<Vec<ManualBalance>> {
        Ok(self.balances.read().map_err(poisoned)?.clone())
    }

    fn contains(&self, label: &str) -> Result<bool> {
        Ok(self
            .balances
            .read()
            .map_err(poisoned)?
            .iter()
            .any(|b| b.label == label))
    }

    async fn insert_all(&self, new_balances: Vec<ManualBalance>) -> Result<usize> {
        let mut balances = self.balances.write().map_err(poisoned)?;
        let mut taken: HashSet<&str> = balances.iter().map(|b| b.label.as_str()).collect();
        for balance in &new_balances {
            if !taken.insert(balance.label.as_str()) {
                return Err(DatabaseError::UniqueViolation(format!(
                    "manual_balances.label: {}",
                    balance.label
                ))
                .into());
            }
        }
        let inserted = new_balances.len();
        balances.extend(new_balances);
        Ok(inserted)
    }

    async fn replace_all(&self, updated: Vec<ManualBalance>) -> Result<usize> {
        let mut balances = self.balances.write().map_err(poisoned)?;
        let mut positions = Vec::with_capacity(updated.len());
        for balance in &updated {
            let idx = balances
                .iter()
                .position(|b| b.label == balance.label)
                .ok_or_else(|| DatabaseError::NotFound(balance.label.clone()))?;
            positions.push(idx);
        }
        let replaced = updated.len();
        for (idx, balance) in positions.into_iter().zip(updated) {
            balances[idx] = balance;
        }
        Ok(replaced)
    }

    async fn remove_all(&self, labels: Vec<String>) -> Result<usize> {
        let mut balances = self.balances.write().map_err(poisoned)?;
        if let Some(missing) = labels
            .iter()
            .find(|label| !balances.iter().any(|b| &b.label == *label))
        {
            return Err(DatabaseError::NotFound(missing.clone()).into());
        }
        let before = balances.len();
        balances.retain(|b| !labels.contains(&b.label));
        Ok(before - balances.len())
    }
}
