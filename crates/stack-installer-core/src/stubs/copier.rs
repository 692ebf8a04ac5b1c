//! Tree copying, extension renaming and file discovery

use crate::error::InstallError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively copy `src` into `dst`, replacing files that already exist.
/// Returns the number of files written.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(InstallError::StubMissing(src.to_path_buf()).into());
    }

    fs::create_dir_all(dst)
        .with_context(|| format!("Failed to create directory: {}", dst.display()))?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
            copied += 1;
        }
    }

    tracing::debug!(from = %src.display(), to = %dst.display(), files = copied, "copied directory");
    Ok(copied)
}

/// Copy a single stub file, creating parent directories and replacing any
/// existing file at `dst`
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(InstallError::StubMissing(src.to_path_buf()).into());
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(src, dst).with_context(|| format!("Failed to write file: {}", dst.display()))?;
    tracing::debug!(from = %src.display(), to = %dst.display(), "copied file");
    Ok(())
}

/// All files under `dir` whose extension is one of `extensions`, in walk order
pub fn files_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if matches {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Rename every `*.from` file under `dir` to `*.to`. Returns the new paths.
pub fn rename_extensions(dir: &Path, from: &str, to: &str) -> Result<Vec<PathBuf>> {
    let mut renamed = Vec::new();
    for path in files_with_extensions(dir, &[from])? {
        let target = path.with_extension(to);
        fs::rename(&path, &target).with_context(|| {
            format!("Failed to rename {} to {}", path.display(), target.display())
        })?;
        renamed.push(target);
    }

    tracing::debug!(dir = %dir.display(), from, to, files = renamed.len(), "renamed extensions");
    Ok(renamed)
}

/// Delete `path` if it is a file. Returns whether anything was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    tracing::debug!(path = %path.display(), "removed file");
    Ok(true)
}
