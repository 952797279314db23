//! Field decoding for balance inputs.
//!
//! Asset and location decoding live with their own modules; this file wires
//! them together with amount parsing and tag normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeSet;
use std::str::FromStr;

use super::balances_errors::ManualBalanceError;
use super::balances_model::BalanceAction;
use crate::assets::{AssetError, AssetId, AssetResolverTrait};
use crate::errors::Result;
use crate::tags::TagRegistryTrait;

/// Decodes a raw asset identifier. Only strings are accepted.
pub fn decode_asset(value: &Value, resolver: &dyn AssetResolverTrait) -> Result<AssetId> {
    match value {
        Value::String(identifier) => resolver.resolve(identifier),
        _ => Err(AssetError::InvalidIdentifier.into()),
    }
}

/// Decodes an amount given either as a decimal string or a JSON number.
///
/// The parsed value keeps the scale of the input, so `"2.0"` stays `2.0`.
pub fn decode_amount(value: &Value) -> Result<Decimal> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => return Err(ManualBalanceError::AmountDecode(other.to_string()).into()),
    };
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| ManualBalanceError::AmountDecode(raw).into())
}

/// Normalizes tag lists against the registry and remembers every unknown tag
/// across a whole batch, so they can be reported together.
pub(crate) struct TagNormalizer<'a> {
    registry: &'a dyn TagRegistryTrait,
    unknown: Vec<String>,
}

impl<'a> TagNormalizer<'a> {
    pub(crate) fn new(registry: &'a dyn TagRegistryTrait) -> Self {
        Self {
            registry,
            unknown: Vec::new(),
        }
    }

    /// Returns the registered spellings, sorted and unique. An empty or
    /// absent list yields `None`.
    pub(crate) fn normalize(&mut self, tags: Option<&[String]>) -> Result<Option<Vec<String>>> {
        let Some(tags) = tags else {
            return Ok(None);
        };

        let mut canonical = BTreeSet::new();
        for tag in tags {
            match self.registry.lookup(tag)? {
                Some(name) => {
                    canonical.insert(name);
                }
                None => {
                    if !self.unknown.iter().any(|u| u.eq_ignore_ascii_case(tag)) {
                        self.unknown.push(tag.clone());
                    }
                }
            }
        }

        if canonical.is_empty() {
            Ok(None)
        } else {
            Ok(Some(canonical.into_iter().collect()))
        }
    }

    /// Fails with every unknown tag seen so far, in first-seen order.
    pub(crate) fn finish(self, action: BalanceAction) -> Result<()> {
        if self.unknown.is_empty() {
            Ok(())
        } else {
            Err(ManualBalanceError::UnknownTags {
                action,
                tags: self.unknown,
            }
            .into())
        }
    }
}
