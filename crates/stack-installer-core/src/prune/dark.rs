//! Dark-mode class removal

use crate::stubs::files_with_extensions;
use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn dark_class() -> &'static Regex {
    static DARK_CLASS: OnceLock<Regex> = OnceLock::new();
    DARK_CLASS.get_or_init(|| Regex::new(r#"\sdark:[^\s"']+"#).expect("valid dark class pattern"))
}

/// Drop every whitespace-preceded `dark:` utility class
pub fn strip_dark_classes(contents: &str) -> Cow<'_, str> {
    dark_class().replace_all(contents, "")
}

/// Strip dark classes from every `*.{extension}` file under `dir` except
/// files named `except`. Returns the number of files rewritten.
pub fn remove_dark_classes(dir: &Path, extension: &str, except: &str) -> Result<usize> {
    let mut rewritten = 0;
    for path in files_with_extensions(dir, &[extension])? {
        if path.file_name().is_some_and(|name| name == except) {
            continue;
        }

        let contents =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        if let Cow::Owned(stripped) = strip_dark_classes(&contents) {
            fs::write(&path, stripped)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            rewritten += 1;
        }
    }

    tracing::debug!(dir = %dir.display(), extension, files = rewritten, "removed dark classes");
    Ok(rewritten)
}
