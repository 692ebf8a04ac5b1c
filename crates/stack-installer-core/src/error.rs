//! Fatal installer errors that callers may want to tell apart

use std::path::PathBuf;
use thiserror::Error;

/// Typed fatal causes. Everything else travels as `anyhow` context.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A stub file or directory the stack needs is not in the stub tree
    #[error("Required stub not found: {}", .0.display())]
    StubMissing(PathBuf),

    /// An external command exited unsuccessfully or could not be spawned
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// A JSON manifest did not have the expected shape
    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },
}
