//! Stack Installer Core - installs Inertia front-end stacks into a Laravel project
//!
//! An install copies stub files into the host project, patches a handful of
//! text files, prunes the copied sources down to the chosen dialect
//! (TypeScript or JavaScript), then installs and builds node dependencies with
//! the project's package manager.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - tree copying, text patches, manifest merges,
//!   snippet pruning, package manager detection
//! - **Layer 2: Stack Orchestration** - [`StackProfile`] per framework and the
//!   shared [`install`] procedure
//! - **Layer 3: CLI/TUI Interface** - [`app::run`] and optional cliclack prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables interactive prompts for choices not given as flags
//!
//! # Example Usage
//!
//! ```ignore
//! use stack_installer_core::{install, Framework, InstallOptions, ProcessRunner, ProjectPaths, StubTree};
//!
//! let stubs = StubTree::locate(None)?;
//! let paths = ProjectPaths::new("/srv/my-app");
//! let options = InstallOptions::new(Framework::Vue);
//! let report = install(&stubs, &paths, options, &ProcessRunner).await?;
//! ```

pub mod app;
pub mod build;
pub mod config;
pub mod error;
pub mod packages;
pub mod patch;
pub mod paths;
pub mod prune;
pub mod stacks;
pub mod stubs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use app::{run, InstallArgs};
pub use build::{CommandRunner, PackageManager, ProcessRunner};
pub use config::{Dialect, Framework, InstallOptions, Selection};
pub use error::InstallError;
pub use paths::ProjectPaths;
pub use stacks::{install, InstallReport, StackProfile};
pub use stubs::StubTree;
