//! Partially specified selections and the YAML config file

use super::options::{Dialect, Framework, InstallOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A possibly incomplete set of choices.
///
/// The same shape is read from `--config` files, so every field is optional:
///
/// ```yaml
/// framework: vue
/// typescript: true
/// ssr: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Selection {
    #[serde(default)]
    pub framework: Option<Framework>,
    #[serde(default)]
    pub typescript: Option<bool>,
    #[serde(default)]
    pub ssr: Option<bool>,
    #[serde(default)]
    pub dark: Option<bool>,
    #[serde(default)]
    pub pest: Option<bool>,
}

impl Selection {
    /// Read a YAML selection file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Keep fields already set, take the rest from `fallback`
    pub fn or(self, fallback: Selection) -> Selection {
        Selection {
            framework: self.framework.or(fallback.framework),
            typescript: self.typescript.or(fallback.typescript),
            ssr: self.ssr.or(fallback.ssr),
            dark: self.dark.or(fallback.dark),
            pest: self.pest.or(fallback.pest),
        }
    }

    /// Whether every choice has been made
    pub fn is_complete(&self) -> bool {
        self.framework.is_some()
            && self.typescript.is_some()
            && self.ssr.is_some()
            && self.dark.is_some()
            && self.pest.is_some()
    }

    /// Freeze into options; unset toggles default to off
    pub fn into_options(self) -> Result<InstallOptions> {
        let framework = self.framework.ok_or_else(|| {
            anyhow::anyhow!("No stack selected. Pass `react` or `vue` (or set `framework` in the config file).")
        })?;

        Ok(InstallOptions {
            framework,
            dialect: if self.typescript.unwrap_or(false) {
                Dialect::Typed
            } else {
                Dialect::Untyped
            },
            ssr: self.ssr.unwrap_or(false),
            dark: self.dark.unwrap_or(false),
            pest: self.pest.unwrap_or(false),
        })
    }
}
