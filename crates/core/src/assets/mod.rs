//! Assets module - asset identifiers and the resolver contract.
//!
//! The balance manager never owns the asset universe. It hands a raw
//! identifier to an [`AssetResolverTrait`] and keeps whatever [`AssetId`]
//! comes back.

mod asset_resolver;
mod assets_constants;
mod assets_errors;
mod assets_model;
mod assets_traits;

pub use asset_resolver::StaticAssetResolver;
pub use assets_constants::KNOWN_ASSET_IDS;
pub use assets_errors::AssetError;
pub use assets_model::AssetId;
pub use assets_traits::AssetResolverTrait;
