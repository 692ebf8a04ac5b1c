//! Inertia front-end stacks
//!
//! Both stacks share one install procedure ([`install`]); what differs
//! between them (packages, file extensions, build script) is described by a
//! [`StackProfile`].

pub mod install;
pub mod react;
pub mod vue;

use crate::config::Dialect;
use crate::packages::PackageDecl;

pub use install::{install, InstallReport};

/// Server-side packages every Inertia stack requires
pub const SERVER_PACKAGES: &[PackageDecl] = &[
    ("inertiajs/inertia-laravel", "^0.6.8"),
    ("laravel/sanctum", "^3.2"),
    ("tightenco/ziggy", "^1.0"),
];

/// Development packages for the Pest test flavour
pub const PEST_PACKAGES: &[PackageDecl] = &[
    ("pestphp/pest", "^2.0"),
    ("pestphp/pest-plugin-laravel", "^2.0"),
];

/// Per-framework facts the install procedure needs
pub trait StackProfile: Send + Sync {
    /// Directory under the stub root holding this stack's sources
    fn stub_dir(&self) -> &'static str;

    /// Client packages for every install
    fn node_packages(&self) -> &'static [PackageDecl];

    /// Client packages added for the typed dialect
    fn typed_node_packages(&self) -> &'static [PackageDecl];

    /// Client packages added for server-side rendering
    fn ssr_node_packages(&self) -> &'static [PackageDecl] {
        &[]
    }

    /// Extension of UI component files
    fn component_extension(&self) -> &'static str;

    /// Extension of script entry points (`app`, `ssr`) in a dialect
    fn script_extension(&self, dialect: Dialect) -> &'static str;

    /// Type checker run before `vite build` in typed installs
    fn type_checker(&self) -> &'static str;

    /// Extension the tailwind content glob should point at, when the shared
    /// config's `.vue` glob does not fit this stack
    fn tailwind_extension(&self, _dialect: Dialect) -> Option<&'static str> {
        None
    }

    /// Whether the host's stock `resources/js/app.js` must be deleted
    fn replaces_default_entry(&self) -> bool {
        false
    }

    /// File name of the landing page, which keeps its dark classes
    fn welcome_page(&self) -> String {
        format!("Welcome.{}", self.component_extension())
    }
}
