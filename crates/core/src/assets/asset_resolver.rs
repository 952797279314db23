use std::collections::HashSet;

use super::assets_constants::KNOWN_ASSET_IDS;
use super::assets_errors::AssetError;
use super::assets_model::AssetId;
use super::assets_traits::AssetResolverTrait;
use crate::errors::Result;

/// Resolver backed by a fixed set of identifiers.
///
/// Matching is exact: `BTC` resolves, `btc` does not.
#[derive(Debug, Clone)]
pub struct StaticAssetResolver {
    known: HashSet<String>,
}

impl StaticAssetResolver {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds identifiers on top of the current set.
    pub fn with_assets<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(identifiers.into_iter().map(Into::into));
        self
    }
}

impl Default for StaticAssetResolver {
    fn default() -> Self {
        Self::new(KNOWN_ASSET_IDS.iter().copied())
    }
}

impl AssetResolverTrait for StaticAssetResolver {
    fn resolve(&self, identifier: &str) -> Result<AssetId> {
        if self.known.contains(identifier) {
            Ok(AssetId::from_resolved(identifier))
        } else {
            Err(AssetError::UnknownAsset(identifier.to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_resolves_known_identifier() {
        let resolver = StaticAssetResolver::default();
        assert_eq!(resolver.resolve("BTC").unwrap().as_str(), "BTC");
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let resolver = StaticAssetResolver::default();
        let err = resolver.resolve("SDSFFGFA").unwrap_err();
        assert!(matches!(err, Error::Asset(AssetError::UnknownAsset(ref id)) if id == "SDSFFGFA"));
        assert_eq!(err.to_string(), "Unknown asset SDSFFGFA provided.");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let resolver = StaticAssetResolver::default();
        assert!(resolver.resolve("btc").is_err());
    }

    #[test]
    fn test_with_assets_extends_the_set() {
        let resolver = StaticAssetResolver::new(["BTC"]).with_assets(["GOLD"]);
        assert!(resolver.resolve("GOLD").is_ok());
        assert!(resolver.resolve("ETH").is_err());
    }
}
