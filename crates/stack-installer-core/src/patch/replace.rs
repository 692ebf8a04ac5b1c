use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Replace every literal occurrence of `needle` in the file at `path`.
///
/// A missing needle leaves the file untouched. Returns whether the file changed.
pub fn replace_in_file(needle: &str, replacement: &str, path: &Path) -> Result<bool> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if !contents.contains(needle) {
        tracing::debug!(path = %path.display(), needle, "patch target not found");
        return Ok(false);
    }

    fs::write(path, contents.replace(needle, replacement))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), needle, replacement, "patched file");
    Ok(true)
}
