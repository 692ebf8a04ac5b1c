//! The `stubs.yaml` file at the root of a stub tree

use serde::Deserialize;

/// Identity of a stub tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StubManifest {
    /// Display name of the stub set
    pub name: String,

    /// Semver version for installer compatibility checking
    pub version: String,
}
