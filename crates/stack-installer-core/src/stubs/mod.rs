//! The read-only stub tree and copying out of it
//!
//! This module provides:
//! - [`StubTree`], the root of the stub directory and its `stubs.yaml` manifest
//! - Tree copying and file discovery helpers
//! - Version compatibility checking against the stub manifest

pub mod copier;
pub mod manifest;
pub mod version;

use crate::error::InstallError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use copier::{copy_dir, copy_file, files_with_extensions, remove_file_if_exists, rename_extensions};
pub use manifest::StubManifest;
pub use version::check_compatibility;

/// Environment variable that overrides the default stub directory
pub const STUBS_DIR_ENV: &str = "STACK_INSTALLER_STUBS";

/// Stub directory shipped with the workspace
pub const DEFAULT_STUBS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../stubs");

/// Root of a stub tree. Only ever read from.
#[derive(Debug, Clone)]
pub struct StubTree {
    root: PathBuf,
}

impl StubTree {
    /// Open a stub tree, failing if the directory does not exist
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(InstallError::StubMissing(root).into());
        }
        Ok(Self { root })
    }

    /// Resolve the stub directory: explicit path, then `STACK_INSTALLER_STUBS`,
    /// then the shipped default
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let root = explicit
            .or_else(|| std::env::var_os(STUBS_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STUBS_DIR));
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a stub relative to the tree root
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    /// Read `stubs.yaml`
    pub fn manifest(&self) -> Result<StubManifest> {
        let manifest_path = self.path("stubs.yaml");
        if !manifest_path.is_file() {
            return Err(InstallError::StubMissing(manifest_path).into());
        }
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))
    }
}
