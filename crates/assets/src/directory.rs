use crate::{AssetError, AssetProvider, SharedAsset};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads assets from files below a branding directory.
///
/// Names are resolved relative to the directory. Absolute names and names
/// that would escape the directory are rejected as not found.
#[derive(Debug)]
pub struct DirectoryAssetProvider {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl DirectoryAssetProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if Path::new(name).is_absolute() {
            return None;
        }
        if Path::new(name)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let full = self.root.join(name);
        match (full.canonicalize(), &self.canonical_root) {
            // Symlinks may still point outside the root.
            (Ok(canonical), Some(root)) if !canonical.starts_with(root) => None,
            (Ok(canonical), _) => Some(canonical),
            (Err(_), _) => Some(full),
        }
    }
}

impl AssetProvider for DirectoryAssetProvider {
    fn load(&self, name: &str) -> Result<SharedAsset, AssetError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| AssetError::NotFound(format!("{} (outside branding directory)", name)))?;

        log::debug!("Loading branding asset '{}' from {}", name, path.display());
        std::fs::read(&path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(name.to_string())
            } else {
                AssetError::LoadFailed {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "DirectoryAssetProvider"
    }
}
