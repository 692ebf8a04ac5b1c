//! Closed enumerations for the install choices

use crate::stacks::{react::ReactStack, vue::VueStack, StackProfile};
use serde::Deserialize;
use std::fmt;

/// UI framework whose Inertia stack is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
        }
    }

    /// Stack-specific stub names, packages and patch targets
    pub fn profile(&self) -> &'static dyn StackProfile {
        match self {
            Framework::React => &ReactStack,
            Framework::Vue => &VueStack,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Source dialect of the client-side code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Typed,
    Untyped,
}

impl Dialect {
    /// Tag used by snippet markers (`// ts-only`, `/* js-begin */`, ...)
    pub fn tag(&self) -> &'static str {
        match self {
            Dialect::Typed => "ts",
            Dialect::Untyped => "js",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Dialect::Typed => Dialect::Untyped,
            Dialect::Untyped => Dialect::Typed,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dialect::Typed => "TypeScript",
            Dialect::Untyped => "JavaScript",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything an install run needs to know about the user's choices.
/// Built once before any file is touched and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    pub framework: Framework,
    pub dialect: Dialect,
    /// Install server-side rendering support
    pub ssr: bool,
    /// Keep `dark:` styling classes in the copied components
    pub dark: bool,
    /// Use Pest instead of PHPUnit for the feature tests
    pub pest: bool,
}

impl InstallOptions {
    /// Options with every toggle off and the untyped dialect
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            dialect: Dialect::Untyped,
            ssr: false,
            dark: false,
            pest: false,
        }
    }

    /// The dialect whose snippets get pruned from the copied sources
    pub fn rejected_dialect(&self) -> Dialect {
        self.dialect.opposite()
    }
}
