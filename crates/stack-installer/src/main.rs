//! Stack Installer CLI - installs an Inertia React or Vue stack into a Laravel project

use clap::Parser;
use colored::Colorize;
use stack_installer_core::{Framework, InstallArgs, Selection};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "stack-install")]
#[command(about = "Install an Inertia React or Vue stack into a Laravel project")]
#[command(version)]
pub struct Args {
    /// Stack to install (prompted for when omitted)
    #[arg(value_enum)]
    pub framework: Option<Framework>,

    /// Install the TypeScript variant
    #[arg(long)]
    pub typescript: bool,

    /// Add server-side rendering support
    #[arg(long)]
    pub ssr: bool,

    /// Keep dark mode classes in the components
    #[arg(long)]
    pub dark: bool,

    /// Use Pest instead of PHPUnit for the feature tests
    #[arg(long)]
    pub pest: bool,

    /// Project directory to install into
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local stub directory to copy from (defaults to $STACK_INSTALLER_STUBS, then the bundled stubs)
    #[arg(long)]
    pub stubs: Option<PathBuf>,

    /// YAML file with default choices
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// A flag that is absent leaves the choice open
fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl From<Args> for InstallArgs {
    fn from(args: Args) -> Self {
        InstallArgs {
            directory: args.directory,
            stubs: args.stubs,
            config: args.config,
            selection: Selection {
                framework: args.framework,
                typescript: flag(args.typescript),
                ssr: flag(args.ssr),
                dark: flag(args.dark),
                pest: flag(args.pest),
            },
            yes: args.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("stack_installer_core=debug,stack_installer=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "tui")]
fn install_terminal_guards() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();
}

#[cfg(not(feature = "tui"))]
fn install_terminal_guards() {}

#[tokio::main]
async fn main() {
    install_terminal_guards();

    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("stack-install v{} starting", CLI_VERSION);

    let result = stack_installer_core::run(args.into(), CLI_VERSION).await;

    #[cfg(feature = "tui")]
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
