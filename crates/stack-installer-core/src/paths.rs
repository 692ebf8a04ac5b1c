//! Target project path builders

use std::path::{Path, PathBuf};

/// Root of the host project. All target paths are pure joins on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the project root
    pub fn base(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    /// Path under `app/`
    pub fn app(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join("app").join(rel)
    }

    /// Path under `resources/`
    pub fn resource(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join("resources").join(rel)
    }
}
