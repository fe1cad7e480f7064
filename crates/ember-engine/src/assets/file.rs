use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// Recommended maximum size for any asset file, in bytes (5 megabytes).
pub const MAX_ASSET_SIZE: u64 = 5_000_000;

/// A validated handle to an external asset file.
///
/// Opening fails immediately when the file is missing: the component
/// that would have used it is never created. Oversized files are allowed
/// with a logged warning so operators can address memory pressure.
/// Decoding the contents stays with the asset collaborators.
#[derive(Debug, Clone)]
pub struct AssetFile {
    path: PathBuf,
}

impl AssetFile {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let path = path.into();
        let meta =
            std::fs::metadata(&path).map_err(|_| AssetError::Missing { path: path.clone() })?;

        if meta.len() >= MAX_ASSET_SIZE {
            log::warn!(
                "{} is larger than {} bytes; using it may cause high memory usage",
                path.display(),
                MAX_ASSET_SIZE
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Vec<u8>, AssetError> {
        Ok(std::fs::read(&self.path)?)
    }

    pub fn read_to_string(&self) -> Result<String, AssetError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
