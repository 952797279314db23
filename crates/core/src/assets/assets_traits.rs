use super::assets_model::AssetId;
use crate::errors::Result;

/// Maps a user-supplied identifier to a known asset.
///
/// Implementations are expected to be fast, local lookups; the balance
/// manager calls them while holding its write gate.
pub trait AssetResolverTrait: Send + Sync {
    /// Returns the resolved asset, or `AssetError::UnknownAsset` when the
    /// identifier is not known.
    fn resolve(&self, identifier: &str) -> Result<AssetId>;
}
