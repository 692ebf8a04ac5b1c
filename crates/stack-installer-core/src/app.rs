//! End-to-end install flow used by the CLI

use crate::build::ProcessRunner;
use crate::config::Selection;
use crate::paths::ProjectPaths;
use crate::stacks::{install, InstallReport};
use crate::stubs::{check_compatibility, StubTree};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for an install run
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    /// Host project root (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Stub tree to read from instead of the default one
    pub stubs: Option<PathBuf>,

    /// YAML file with selection defaults
    pub config: Option<PathBuf>,

    /// Choices given on the command line
    pub selection: Selection,

    /// Never prompt; unanswered toggles are off
    pub yes: bool,
}

/// Resolve the selection, install the stack, and print the next steps
pub async fn run(args: InstallArgs, cli_version: &str) -> Result<InstallReport> {
    let stubs = StubTree::locate(args.stubs.clone())?;
    let manifest = stubs.manifest()?;
    if let Some(warning) = check_compatibility(cli_version, &manifest.version) {
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }

    let root = resolve_directory(args.directory.as_deref())?;

    let mut selection = args.selection.clone();
    if let Some(path) = &args.config {
        selection = selection.or(Selection::load(path)?);
    }
    let selection = complete_selection(selection, args.yes)?;
    let options = selection.into_options()?;

    println!(
        "{}",
        format!(
            "Installing the Inertia {} stack ({}) from {}",
            options.framework, options.dialect, manifest.name
        )
        .cyan()
        .bold()
    );
    println!();

    let paths = ProjectPaths::new(root);
    let report = install(&stubs, &paths, options, &ProcessRunner).await?;

    println!();
    println!("{}", "Stack installed successfully.".green().bold());
    println!();
    println!("  Next steps");
    println!();
    for (i, step) in report.next_steps().iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(report)
}

fn resolve_directory(directory: Option<&std::path::Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    let path = match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }
    Ok(path)
}

#[cfg(feature = "tui")]
fn complete_selection(selection: Selection, yes: bool) -> Result<Selection> {
    if yes || selection.is_complete() {
        return Ok(selection);
    }
    crate::tui::prompt_selection(selection)
}

#[cfg(not(feature = "tui"))]
fn complete_selection(selection: Selection, _yes: bool) -> Result<Selection> {
    Ok(selection)
}
