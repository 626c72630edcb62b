//! Storage for files attached to activities.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{PlannerError, Result};

/// Keeps attachment bytes and returns a reference to record on the activity.
pub trait AttachmentStore: Send + Sync {
    /// Stores `bytes` under `name` and returns the stored path.
    ///
    /// Only the final component of `name` is used, so callers cannot write
    /// outside the store.
    fn store(&self, name: &str, bytes: &[u8]) -> Result<String>;
}

/// [`AttachmentStore`] that writes files into one directory.
///
/// A second file with the same name replaces the first.
#[derive(Debug, Clone)]
pub struct DirectoryAttachmentStore {
    root: PathBuf,
}

impl DirectoryAttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `$XDG_DATA_HOME/wayfarer/uploads`, created on demand.
    pub fn with_default_root() -> Result<Self> {
        let root = xdg::BaseDirectories::with_prefix("wayfarer")
            .create_data_directory("uploads")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AttachmentStore for DirectoryAttachmentStore {
    fn store(&self, name: &str, bytes: &[u8]) -> Result<String> {
        let file_name = Path::new(name).file_name().ok_or_else(|| {
            PlannerError::invalid_input("attachment").with_reason(format!("'{name}' has no file name"))
        })?;

        std::fs::create_dir_all(&self.root).map_err(|e| PlannerError::FileSystem {
            path: self.root.clone(),
            source: e,
        })?;

        let path = self.root.join(file_name);
        std::fs::write(&path, bytes).map_err(|e| PlannerError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        debug!("Stored attachment {} ({} bytes)", path.display(), bytes.len());
        Ok(path.to_string_lossy().into_owned())
    }
}
