//! Asset domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an asset that an [`super::AssetResolverTrait`] has vouched for.
///
/// Only resolvers construct these; the rest of the crate treats the value
/// as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Wraps an identifier that has already been validated.
    ///
    /// Storage layers use this when loading rows that were resolved at
    /// write time.
    pub fn from_resolved(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
