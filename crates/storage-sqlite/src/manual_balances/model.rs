//! Database models for manually tracked balances.

use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use tallyfolio_core::balances::ManualBalance;
use tallyfolio_core::{AssetId, Location};

/// Database model for a manually tracked balance. `tags` holds a JSON array.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::manual_balances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ManualBalanceDB {
    pub id: i32,
    pub label: String,
    pub asset: String,
    pub amount: String,
    pub location: String,
    pub tags: Option<String>,
}

/// Database model for inserting a balance; `id` is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::manual_balances)]
pub struct NewManualBalanceDB {
    pub label: String,
    pub asset: String,
    pub amount: String,
    pub location: String,
    pub tags: Option<String>,
}

/// Every column except the key, written in full on edit.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::manual_balances)]
#[diesel(treat_none_as_null = true)]
pub struct ManualBalanceChangesDB {
    pub asset: String,
    pub amount: String,
    pub location: String,
    pub tags: Option<String>,
}

fn encode_tags(tags: Option<&Vec<String>>) -> Result<Option<String>, StorageError> {
    Ok(tags.map(|t| serde_json::to_string(t)).transpose()?)
}

impl TryFrom<&ManualBalance> for NewManualBalanceDB {
    type Error = StorageError;

    fn try_from(domain: &ManualBalance) -> Result<Self, Self::Error> {
        Ok(Self {
            label: domain.label.clone(),
            asset: domain.asset.as_str().to_string(),
            amount: domain.amount.to_string(),
            location: domain.location.as_str().to_string(),
            tags: encode_tags(domain.tags.as_ref())?,
        })
    }
}

impl TryFrom<&ManualBalance> for ManualBalanceChangesDB {
    type Error = StorageError;

    fn try_from(domain: &ManualBalance) -> Result<Self, Self::Error> {
        Ok(Self {
            asset: domain.asset.as_str().to_string(),
            amount: domain.amount.to_string(),
            location: domain.location.as_str().to_string(),
            tags: encode_tags(domain.tags.as_ref())?,
        })
    }
}

// Rows were validated on the way in, so a failure here means the file was
// edited by hand or written by something else.
impl TryFrom<ManualBalanceDB> for ManualBalance {
    type Error = StorageError;

    fn try_from(db: ManualBalanceDB) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&db.amount).map_err(|e| {
            StorageError::SerializationError(format!("amount of {}: {}", db.label, e))
        })?;
        let location = Location::from_str(&db.location).map_err(|e| {
            StorageError::SerializationError(format!("location of {}: {}", db.label, e))
        })?;
        let tags = db
            .tags
            .as_deref()
            .map(|raw| serde_json::from_str::<Vec<String>>(raw))
            .transpose()?
            .filter(|tags| !tags.is_empty());

        Ok(Self {
            label: db.label,
            asset: AssetId::from_resolved(db.asset),
            amount,
            location,
            tags,
        })
    }
}
