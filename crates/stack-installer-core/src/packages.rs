//! Dependency declarations in `composer.json` and `package.json`
//!
//! Manifests are edited as ordered JSON objects: existing keys keep their
//! position, new keys are appended, and the file's indentation width and
//! trailing newline are carried over to the rewritten file.

use crate::error::InstallError;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Package name and version constraint
pub type PackageDecl = (&'static str, &'static str);

const DEFAULT_INDENT: &str = "    ";

/// A JSON package manifest loaded for editing
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    root: Map<String, Value>,
    indent: String,
    trailing_newline: bool,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` is only used for messages and [`save`](Self::save)
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let Value::Object(root) = value else {
            return Err(InstallError::InvalidManifest {
                path: path.to_path_buf(),
                reason: "top level is not an object".to_string(),
            }
            .into());
        };

        Ok(Self {
            path: path.to_path_buf(),
            root,
            indent: detect_indent(content),
            trailing_newline: content.ends_with('\n'),
        })
    }

    /// Entries of a dependency section, if present
    pub fn section(&self, section: &str) -> Option<&Map<String, Value>> {
        self.root.get(section).and_then(Value::as_object)
    }

    /// Add or overwrite entries in `section`, creating it when absent.
    /// Colliding keys take the new constraint and keep their position.
    pub fn merge(&mut self, section: &str, additions: &[PackageDecl]) -> Result<()> {
        let entries = self.section_mut(section)?;
        for (name, version) in additions {
            entries.insert((*name).to_string(), Value::String((*version).to_string()));
        }
        tracing::debug!(manifest = %self.path.display(), section, count = additions.len(), "declared packages");
        Ok(())
    }

    /// Remove entries from `section`. Names that are not declared are ignored.
    pub fn remove(&mut self, section: &str, names: &[&str]) -> Result<()> {
        if !self.root.contains_key(section) {
            return Ok(());
        }
        let entries = self.section_mut(section)?;
        for name in names {
            entries.shift_remove(*name);
        }
        Ok(())
    }

    /// Serialize with the original indentation and newline convention
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root
            .serialize(&mut serializer)
            .with_context(|| format!("Failed to serialize {}", self.path.display()))?;

        let mut rendered = String::from_utf8(buf)?;
        if self.trailing_newline {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.render()?)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    fn section_mut(&mut self, section: &str) -> Result<&mut Map<String, Value>> {
        let value = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        value.as_object_mut().ok_or_else(|| {
            InstallError::InvalidManifest {
                path: self.path.clone(),
                reason: format!("`{}` is not an object", section),
            }
            .into()
        })
    }
}

/// Load, merge into `section`, and save in one step
pub fn declare_packages(path: &Path, section: &str, additions: &[PackageDecl]) -> Result<()> {
    let mut manifest = PackageManifest::load(path)?;
    manifest.merge(section, additions)?;
    manifest.save()
}

/// Indentation of the first indented line, defaulting to four spaces
fn detect_indent(content: &str) -> String {
    content
        .lines()
        .skip(1)
        .find_map(|line| {
            let width = line.len() - line.trim_start_matches([' ', '\t']).len();
            (width > 0 && width < line.len()).then(|| line[..width].to_string())
        })
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}
