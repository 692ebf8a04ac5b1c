use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const GROUPS_OPEN: &str = "$middlewareGroups = [";
const GROUPS_CLOSE: &str = "];";
const GROUP_CLOSE: &str = "],";
const ENTRY_INDENT: &str = "            ";

/// Register `name` in a middleware group of the HTTP kernel, right after each
/// `after` entry of that group.
///
/// Returns whether the kernel changed. A group that already lists `name`, or a
/// kernel without the expected layout, is left alone.
pub fn install_middleware_after(kernel: &Path, after: &str, name: &str, group: &str) -> Result<bool> {
    let contents =
        fs::read_to_string(kernel).with_context(|| format!("Failed to read {}", kernel.display()))?;

    match insert_middleware_after(&contents, after, name, group) {
        Some(updated) => {
            fs::write(kernel, updated)
                .with_context(|| format!("Failed to write {}", kernel.display()))?;
            tracing::debug!(kernel = %kernel.display(), name, group, "registered middleware");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Pure form of [`install_middleware_after`]; `None` means nothing to do
pub fn insert_middleware_after(contents: &str, after: &str, name: &str, group: &str) -> Option<String> {
    let block_start = contents.find(GROUPS_OPEN)? + GROUPS_OPEN.len();
    let block_end = block_start + contents[block_start..].find(GROUPS_CLOSE)?;

    let header = format!("'{}' => [", group);
    let group_start = block_start + contents[block_start..block_end].find(&header)? + header.len();
    let group_end = group_start + contents[group_start..block_end].find(GROUP_CLOSE)?;
    let body = &contents[group_start..group_end];

    if body.contains(name) {
        return None;
    }

    let anchor = format!("{},", after);
    if !body.contains(&anchor) {
        return None;
    }

    // Every occurrence of the anchor in the group gets the entry
    let patched = body.replace(&anchor, &format!("{}\n{}{},", anchor, ENTRY_INDENT, name));

    let mut updated = String::with_capacity(contents.len() + patched.len() - body.len());
    updated.push_str(&contents[..group_start]);
    updated.push_str(&patched);
    updated.push_str(&contents[group_end..]);
    Some(updated)
}
