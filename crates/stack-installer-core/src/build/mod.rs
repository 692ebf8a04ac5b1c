//! Dependency install and production build through the project's package manager
//!
//! The package manager is picked from the lockfile in the project root. Both
//! commands run to completion in order; the first failure aborts the install.

mod runner;

use anyhow::Result;
use std::fmt;
use std::path::Path;

pub use runner::{CommandRunner, ProcessRunner};

/// Lockfiles in detection priority order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
];

/// Node package manager governing the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// First lockfile present wins; npm when there is none
    pub fn detect(root: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| root.join(lockfile).is_file())
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Dependency install, then production build
    pub fn commands(&self) -> [BuildCommand; 2] {
        [
            BuildCommand {
                program: self.program(),
                args: &["install"],
            },
            BuildCommand {
                program: self.program(),
                args: &["run", "build"],
            },
        ]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// One external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Install and build with the detected package manager
pub async fn install_and_build<R: CommandRunner>(runner: &R, root: &Path) -> Result<PackageManager> {
    let manager = PackageManager::detect(root);
    tracing::info!(package_manager = %manager, "installing and building node dependencies");

    for command in manager.commands() {
        runner.run(&command, root).await?;
    }

    Ok(manager)
}
