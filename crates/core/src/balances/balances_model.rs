//! Manually tracked balance domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::assets::AssetId;
use crate::locations::Location;
use crate::utils::decimal_serde::decimal_serde;

/// A balance the user tracks by hand. `label` is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualBalance {
    pub label: String,
    pub asset: AssetId,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    pub location: Location,
    /// Registered tag names, sorted and unique. `None` when untagged, never
    /// `Some` of an empty list.
    pub tags: Option<Vec<String>>,
}

/// Input model for adding a balance.
///
/// `asset`, `amount` and `location` stay raw so that their decoders can
/// report type errors in their own terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewManualBalance {
    pub label: String,
    pub asset: Value,
    pub amount: Value,
    pub location: Value,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewManualBalance {
    pub fn new(
        label: impl Into<String>,
        asset: impl Into<Value>,
        amount: impl Into<Value>,
        location: impl Into<Value>,
    ) -> Self {
        Self {
            label: label.into(),
            asset: asset.into(),
            amount: amount.into(),
            location: location.into(),
            tags: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Input model for editing a balance. Only fields that are `Some` change.
///
/// For `tags`: `None` leaves them alone, `Some(None)` and `Some(Some(vec![]))`
/// both clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualBalanceUpdate {
    pub label: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Value>,
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Option<Vec<String>>>,
}

/// A key that is present is `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ManualBalanceUpdate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_asset(mut self, asset: impl Into<Value>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    pub fn with_amount(mut self, amount: impl Into<Value>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<Value>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(Some(tags.into_iter().map(Into::into).collect()));
        self
    }

    pub fn clearing_tags(mut self) -> Self {
        self.tags = Some(None);
        self
    }
}

/// The batch operation a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Add,
    Edit,
    Remove,
}

impl BalanceAction {
    pub fn verb(&self) -> &'static str {
        match self {
            BalanceAction::Add => "add",
            BalanceAction::Edit => "edit",
            BalanceAction::Remove => "remove",
        }
    }

    pub fn gerund(&self) -> &'static str {
        match self {
            BalanceAction::Add => "adding",
            BalanceAction::Edit => "editing",
            BalanceAction::Remove => "removing",
        }
    }
}

impl fmt::Display for BalanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_distinguishes_omitted_from_null_tags() {
        let omitted: ManualBalanceUpdate = serde_json::from_value(json!({"label": "a"})).unwrap();
        assert_eq!(omitted.tags, None);

        let null: ManualBalanceUpdate =
            serde_json::from_value(json!({"label": "a", "tags": null})).unwrap();
        assert_eq!(null.tags, Some(None));

        let empty: ManualBalanceUpdate =
            serde_json::from_value(json!({"label": "a", "tags": []})).unwrap();
        assert_eq!(empty.tags, Some(Some(vec![])));
    }

    #[test]
    fn test_update_keeps_explicit_null_fields() {
        let update: ManualBalanceUpdate =
            serde_json::from_value(json!({"label": "a", "asset": null})).unwrap();
        assert_eq!(update.asset, Some(Value::Null));
        assert_eq!(update.amount, None);
    }

    #[test]
    fn test_balance_serializes_amount_as_string() {
        let balance = ManualBalance {
            label: "W1".to_string(),
            asset: AssetId::from_resolved("BTC"),
            amount: "1.425".parse().unwrap(),
            location: Location::Blockchain,
            tags: None,
        };
        let value = serde_json::to_value(&balance).unwrap();
        assert_eq!(
            value,
            json!({
                "label": "W1",
                "asset": "BTC",
                "amount": "1.425",
                "location": "blockchain",
                "tags": null
            })
        );
    }
}
