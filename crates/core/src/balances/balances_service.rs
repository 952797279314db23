use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::balances_decoder::{decode_amount, decode_asset, TagNormalizer};
use super::balances_errors::ManualBalanceError;
use super::balances_model::{BalanceAction, ManualBalance, ManualBalanceUpdate, NewManualBalance};
use super::balances_traits::{ManualBalanceRepositoryTrait, ManualBalanceServiceTrait};
use crate::assets::{AssetId, AssetResolverTrait};
use crate::errors::Result;
use crate::locations::{decode_location, Location};
use crate::tags::TagRegistryTrait;

/// The balance manager.
///
/// Writes are serialized through `write_gate` so that validation and commit
/// see the same collection.
pub struct ManualBalanceService {
    repository: Arc<dyn ManualBalanceRepositoryTrait>,
    tag_registry: Arc<dyn TagRegistryTrait>,
    asset_resolver: Arc<dyn AssetResolverTrait>,
    write_gate: Mutex<()>,
}

impl ManualBalanceService {
    pub fn new(
        repository: Arc<dyn ManualBalanceRepositoryTrait>,
        tag_registry: Arc<dyn TagRegistryTrait>,
        asset_resolver: Arc<dyn AssetResolverTrait>,
    ) -> Self {
        Self {
            repository,
            tag_registry,
            asset_resolver,
            write_gate: Mutex::new(()),
        }
    }

    fn decode_new(&self, items: &[NewManualBalance]) -> Result<Vec<ManualBalance>> {
        let mut normalizer = TagNormalizer::new(self.tag_registry.as_ref());
        let mut decoded = Vec::with_capacity(items.len());
        for item in items {
            if item.label.is_empty() {
                return Err(ManualBalanceError::EmptyLabel.into());
            }
            decoded.push(ManualBalance {
                label: item.label.clone(),
                asset: decode_asset(&item.asset, self.asset_resolver.as_ref())?,
                amount: decode_amount(&item.amount)?,
                location: decode_location(&item.location)?,
                tags: normalizer.normalize(item.tags.as_deref())?,
            });
        }
        normalizer.finish(BalanceAction::Add)?;
        Ok(decoded)
    }

    fn check_new_labels(&self, balances: &[ManualBalance]) -> Result<()> {
        let repeated = repeated_labels(balances.iter().map(|b| b.label.as_str()));
        if !repeated.is_empty() {
            return Err(ManualBalanceError::RepeatedLabels(repeated).into());
        }

        let mut existing = Vec::new();
        for balance in balances {
            if self.repository.contains(&balance.label)? {
                existing.push(balance.label.clone());
            }
        }
        if !existing.is_empty() {
            return Err(ManualBalanceError::DuplicateLabels(existing).into());
        }
        Ok(())
    }

    fn decode_update(&self, update: &ManualBalanceUpdate) -> Result<DecodedUpdate> {
        Ok(DecodedUpdate {
            asset: update
                .asset
                .as_ref()
                .map(|asset| decode_asset(asset, self.asset_resolver.as_ref()))
                .transpose()?,
            amount: update.amount.as_ref().map(decode_amount).transpose()?,
            location: update.location.as_ref().map(decode_location).transpose()?,
        })
    }

    fn apply_updates(&self, updates: &[ManualBalanceUpdate]) -> Result<Vec<ManualBalance>> {
        let decoded = updates
            .iter()
            .map(|update| self.decode_update(update))
            .collect::<Result<Vec<_>>>()?;

        let repeated = repeated_labels(updates.iter().map(|u| u.label.as_str()));
        if !repeated.is_empty() {
            return Err(ManualBalanceError::RepeatedLabels(repeated).into());
        }

        let mut current: HashMap<String, ManualBalance> = self
            .repository
            .get_all()?
            .into_iter()
            .map(|b| (b.label.clone(), b))
            .collect();

        let missing: Vec<String> = updates
            .iter()
            .filter(|u| !current.contains_key(&u.label))
            .map(|u| u.label.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ManualBalanceError::UnknownLabels {
                action: BalanceAction::Edit,
                labels: missing,
            }
            .into());
        }

        let mut normalizer = TagNormalizer::new(self.tag_registry.as_ref());
        let mut updated = Vec::with_capacity(updates.len());
        for (update, fields) in updates.iter().zip(decoded) {
            let Some(mut balance) = current.remove(&update.label) else {
                continue;
            };
            if let Some(asset) = fields.asset {
                balance.asset = asset;
            }
            if let Some(amount) = fields.amount {
                balance.amount = amount;
            }
            if let Some(location) = fields.location {
                balance.location = location;
            }
            match &update.tags {
                None => {}
                Some(None) => balance.tags = None,
                Some(Some(tags)) => balance.tags = normalizer.normalize(Some(tags))?,
            }
            updated.push(balance);
        }
        normalizer.finish(BalanceAction::Edit)?;
        Ok(updated)
    }

    fn check_existing(&self, labels: &[String]) -> Result<()> {
        let mut missing = Vec::new();
        for label in labels {
            if !self.repository.contains(label)? {
                missing.push(label.clone());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ManualBalanceError::UnknownLabels {
                action: BalanceAction::Remove,
                labels: missing,
            }
            .into())
        }
    }
}

/// Fields of an edit item that were present and decoded.
struct DecodedUpdate {
    asset: Option<AssetId>,
    amount: Option<Decimal>,
    location: Option<Location>,
}

/// Labels that appear more than once, in first-repeat order.
fn repeated_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<String> = Vec::new();
    for label in labels {
        if !seen.insert(label) && !repeated.iter().any(|r| r == label) {
            repeated.push(label.to_string());
        }
    }
    repeated
}

#[async_trait]
impl ManualBalanceServiceTrait for ManualBalanceService {
    fn get_manual_balances(&self) -> Result<Vec<ManualBalance>> {
        self.repository.get_all()
    }

    async fn add_manual_balances(
        &self,
        balances: Vec<NewManualBalance>,
    ) -> Result<Vec<ManualBalance>> {
        if balances.is_empty() {
            return Err(ManualBalanceError::EmptyBatch("balances").into());
        }

        let _guard = self.write_gate.lock().await;
        let decoded = self
            .decode_new(&balances)
            .and_then(|decoded| self.check_new_labels(&decoded).map(|_| decoded))
            .inspect_err(|e| warn!("Rejected manual balance add: {}", e))?;

        debug!("Adding {} manually tracked balances", decoded.len());
        self.repository.insert_all(decoded).await?;
        self.repository.get_all()
    }

    async fn edit_manual_balances(
        &self,
        updates: Vec<ManualBalanceUpdate>,
    ) -> Result<Vec<ManualBalance>> {
        if updates.is_empty() {
            return Err(ManualBalanceError::EmptyBatch("balances").into());
        }
        if updates.iter().any(|u| u.label.is_empty()) {
            return Err(ManualBalanceError::EmptyLabel.into());
        }

        let _guard = self.write_gate.lock().await;
        let updated = self
            .apply_updates(&updates)
            .inspect_err(|e| warn!("Rejected manual balance edit: {}", e))?;

        debug!("Editing {} manually tracked balances", updated.len());
        self.repository.replace_all(updated).await?;
        self.repository.get_all()
    }

    async fn remove_manual_balances(&self, labels: Vec<String>) -> Result<Vec<ManualBalance>> {
        if labels.is_empty() {
            return Err(ManualBalanceError::EmptyBatch("labels").into());
        }

        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }

        let _guard = self.write_gate.lock().await;
        self.check_existing(&unique)
            .inspect_err(|e| warn!("Rejected manual balance removal: {}", e))?;

        debug!("Removing {} manually tracked balances", unique.len());
        self.repository.remove_all(unique).await?;
        self.repository.get_all()
    }
}
