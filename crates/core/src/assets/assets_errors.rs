use thiserror::Error;

/// Errors raised while turning a raw identifier into an [`super::AssetId`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Tried to initialize an asset out of a non-string identifier")]
    InvalidIdentifier,

    #[error("Unknown asset {0} provided.")]
    UnknownAsset(String),
}
