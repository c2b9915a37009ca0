//! Branding asset providers for erasure certificates.
//!
//! A certificate may carry an organisation's own brand mark instead of the
//! built-in one. The renderer asks an [`AssetProvider`] for the raw image
//! bytes by name and decodes them itself.
//!
//! - [`DirectoryAssetProvider`]: reads assets from a branding directory
//! - [`InMemoryAssetProvider`]: pre-populated storage, mostly for tests and embedding

mod directory;
mod memory;

pub use directory::DirectoryAssetProvider;
pub use memory::InMemoryAssetProvider;

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for asset lookups.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset '{name}': {message}")]
    LoadFailed { name: String, message: String },
}

/// Reference-counted asset bytes.
pub type SharedAsset = Arc<Vec<u8>>;

/// A source of named branding assets.
///
/// Providers are shared between concurrent renders, hence `Send + Sync`.
pub trait AssetProvider: Send + Sync + Debug {
    /// Load an asset by name.
    fn load(&self, name: &str) -> Result<SharedAsset, AssetError>;

    fn exists(&self, name: &str) -> bool;

    /// Human-readable provider name, for logging.
    fn name(&self) -> &'static str;
}
