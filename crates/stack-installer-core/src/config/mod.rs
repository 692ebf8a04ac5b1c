//! Selection flags and their sources
//!
//! An install run is driven by one immutable [`InstallOptions`] value. It is
//! assembled from partial [`Selection`]s layered in precedence order: command
//! line flags, an optional YAML file, interactive answers, then defaults.

mod options;
mod selection;

pub use options::{Dialect, Framework, InstallOptions};
pub use selection::Selection;
