use crate::{AssetError, AssetProvider, SharedAsset};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An asset provider backed by a map held in memory.
#[derive(Debug, Default)]
pub struct InMemoryAssetProvider {
    assets: RwLock<HashMap<String, SharedAsset>>,
}

impl InMemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `name`, replacing any previous asset.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the internal lock is poisoned.
    pub fn insert(&self, name: impl Into<String>, data: Vec<u8>) -> Result<(), AssetError> {
        let name = name.into();
        let mut assets = self.assets.write().map_err(|_| AssetError::LoadFailed {
            name: name.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(name, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_asset(self, name: impl Into<String>, data: Vec<u8>) -> Result<Self, AssetError> {
        self.insert(name, data)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetProvider for InMemoryAssetProvider {
    fn load(&self, name: &str) -> Result<SharedAsset, AssetError> {
        let assets = self.assets.read().map_err(|_| AssetError::LoadFailed {
            name: name.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetProvider"
    }
}
