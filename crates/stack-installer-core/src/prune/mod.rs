//! Dialect pruning of copied client-side sources
//!
//! Stub sources carry both dialects, with the parts that only one dialect
//! needs tagged by snippet markers (see [`markers`]). Pruning for the
//! *rejected* dialect deletes its tagged regions and then strips every
//! remaining marker of either dialect, leaving plain source for the chosen one.
//!
//! Unpaired markers are not an error: they are removed like any other leftover
//! marker and the code around them is kept.

pub mod dark;
pub mod markers;

use crate::config::Dialect;
use crate::stubs::files_with_extensions;
use anyhow::{Context, Result};
use markers::{Marker, MarkerForm, MarkerKind};
use std::fs;
use std::ops::Range;
use std::path::Path;

pub use dark::{remove_dark_classes, strip_dark_classes};

/// File extensions scanned for markers
pub const PRUNABLE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "vue"];

/// Vue single-file components declare their script dialect on the root tag
const VUE_TS_ATTRIBUTE: &str = " lang=\"ts\"";

/// Remove the `rejected` dialect's snippets and all leftover markers
pub fn prune_snippets(contents: &str, rejected: Dialect) -> String {
    let markers = markers::scan(contents);
    if markers.is_empty() {
        return contents.to_string();
    }

    let pairing = markers::pair(&markers);
    let mut deletions: Vec<Range<usize>> = Vec::new();

    for block in &pairing.blocks {
        let (begin, end) = (&markers[block.begin], &markers[block.end]);
        if begin.dialect == rejected {
            deletions.push(begin.span.start..end.span.end);
        } else {
            deletions.push(leftover(begin));
            deletions.push(leftover(end));
        }
    }

    for &idx in &pairing.singles {
        let marker = &markers[idx];
        if marker.dialect == rejected {
            deletions.push(marker.span.clone());
        } else {
            deletions.push(marker.comment.clone());
        }
    }

    deletions.extend(pairing.orphans.iter().map(|&idx| leftover(&markers[idx])));

    apply_deletions(contents, deletions)
}

/// Prune one file in place
pub fn prune_file(path: &Path, rejected: Dialect) -> Result<()> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut pruned = prune_snippets(&contents, rejected);
    if rejected == Dialect::Typed && path.extension().is_some_and(|ext| ext == "vue") {
        pruned = pruned.replace(VUE_TS_ATTRIBUTE, "");
    }

    fs::write(path, pruned).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Prune every source file under `dir`. Returns the number of files processed.
pub fn prune_tree(dir: &Path, rejected: Dialect) -> Result<usize> {
    let files = files_with_extensions(dir, PRUNABLE_EXTENSIONS)?;
    for file in &files {
        prune_file(file, rejected)?;
    }
    tracing::debug!(dir = %dir.display(), rejected = rejected.tag(), files = files.len(), "pruned snippets");
    Ok(files.len())
}

/// What to delete for a marker that does not take code with it: begin/end
/// lines go entirely, inline comments and `-only` suffixes go alone
fn leftover(marker: &Marker) -> Range<usize> {
    match (marker.form, marker.kind) {
        (MarkerForm::Line, MarkerKind::Begin | MarkerKind::End) => marker.span.clone(),
        _ => marker.comment.clone(),
    }
}

fn apply_deletions(contents: &str, mut deletions: Vec<Range<usize>>) -> String {
    deletions.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(contents.len());
    let mut cursor = 0;
    for range in deletions {
        if range.start > cursor {
            out.push_str(&contents[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    out.push_str(&contents[cursor..]);
    out
}
