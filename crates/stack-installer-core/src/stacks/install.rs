//! The install procedure shared by both stacks

use super::{StackProfile, PEST_PACKAGES, SERVER_PACKAGES};
use crate::build::{self, CommandRunner, PackageManager};
use crate::config::{Dialect, InstallOptions};
use crate::packages::{declare_packages, PackageManifest};
use crate::patch::{install_middleware_after, replace_in_file};
use crate::paths::ProjectPaths;
use crate::prune::{prune_tree, remove_dark_classes};
use crate::stubs::{copy_dir, copy_file, remove_file_if_exists, rename_extensions, StubTree};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

const INERTIA_MIDDLEWARE: &str = "\\App\\Http\\Middleware\\HandleInertiaRequests::class";
const PRELOAD_MIDDLEWARE: &str =
    "\\Illuminate\\Http\\Middleware\\AddLinkHeadersForPreloadedAssets::class";

const NODE_DEV_SECTION: &str = "devDependencies";

/// Outcome of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub options: InstallOptions,
    pub package_manager: PackageManager,
}

impl InstallReport {
    /// Commands left for the user to run
    pub fn next_steps(&self) -> Vec<String> {
        vec![
            "composer update".to_string(),
            "php artisan migrate".to_string(),
            format!("{} run dev", self.package_manager),
        ]
    }
}

/// Install the selected stack into the project, then install and build its
/// node dependencies through `runner`.
///
/// Stops at the first failure; files written up to that point stay in place.
pub async fn install<R: CommandRunner>(
    stubs: &StubTree,
    paths: &ProjectPaths,
    options: InstallOptions,
    runner: &R,
) -> Result<InstallReport> {
    let run = Install {
        stubs,
        paths,
        options,
        profile: options.framework.profile(),
    };

    tracing::info!(
        framework = %options.framework,
        dialect = %options.dialect,
        ssr = options.ssr,
        dark = options.dark,
        pest = options.pest,
        root = %paths.root().display(),
        "installing stack"
    );

    run.declare_packages()?;
    run.install_backend()?;
    run.install_pages()?;
    run.install_tests()?;
    run.install_routes()?;
    run.install_build_config()?;

    if options.ssr {
        run.install_ssr()?;
    }

    match options.dialect {
        Dialect::Typed => run.install_typed()?,
        Dialect::Untyped => run.install_untyped()?,
    }
    run.prune_sources()?;

    step("Installing and building Node dependencies");
    let package_manager = build::install_and_build(runner, paths.root()).await?;

    Ok(InstallReport {
        options,
        package_manager,
    })
}

fn step(message: &str) {
    println!("  {} {}", "->".blue(), message);
}

struct Install<'a> {
    stubs: &'a StubTree,
    paths: &'a ProjectPaths,
    options: InstallOptions,
    profile: &'static dyn StackProfile,
}

impl Install<'_> {
    /// Path inside this stack's stub directory
    fn stack_stub(&self, rel: &str) -> PathBuf {
        self.stubs.path(self.profile.stub_dir()).join(rel)
    }

    fn js(&self, rel: &str) -> PathBuf {
        self.paths.resource("js").join(rel)
    }

    fn declare_packages(&self) -> Result<()> {
        step("Declaring packages");
        declare_packages(&self.paths.base("composer.json"), "require", SERVER_PACKAGES)?;
        declare_packages(
            &self.paths.base("package.json"),
            NODE_DEV_SECTION,
            self.profile.node_packages(),
        )
    }

    fn install_backend(&self) -> Result<()> {
        step("Copying controllers, requests and middleware");
        copy_dir(
            &self.stubs.path("inertia-common/app/Http/Controllers"),
            &self.paths.app("Http/Controllers"),
        )?;
        copy_dir(
            &self.stubs.path("default/app/Http/Requests"),
            &self.paths.app("Http/Requests"),
        )?;

        let kernel = self.paths.app("Http/Kernel.php");
        install_middleware_after(&kernel, "SubstituteBindings::class", INERTIA_MIDDLEWARE, "web")?;
        install_middleware_after(&kernel, INERTIA_MIDDLEWARE, PRELOAD_MIDDLEWARE, "web")?;

        copy_file(
            &self.stubs.path("inertia-common/app/Http/Middleware/HandleInertiaRequests.php"),
            &self.paths.app("Http/Middleware/HandleInertiaRequests.php"),
        )
    }

    fn install_pages(&self) -> Result<()> {
        step("Copying views, components and pages");
        copy_file(
            &self.stack_stub("resources/views/app.blade.php"),
            &self.paths.resource("views/app.blade.php"),
        )?;

        for dir in ["Components", "Layouts", "Pages"] {
            copy_dir(&self.stack_stub(&format!("resources/js/{}", dir)), &self.js(dir))?;
        }

        if !self.options.dark {
            remove_dark_classes(
                &self.paths.resource("js"),
                self.profile.component_extension(),
                &self.profile.welcome_page(),
            )?;
        }
        Ok(())
    }

    fn install_tests(&self) -> Result<()> {
        step("Copying tests");
        let tests = |rel: &str| self.paths.base("tests").join(rel);

        if !self.options.pest {
            copy_dir(&self.stubs.path("default/tests/Feature"), &tests("Feature"))?;
            return copy_dir(&self.stubs.path("inertia-common/tests/Feature"), &tests("Feature"))
                .map(|_| ());
        }

        let composer = self.paths.base("composer.json");
        let mut manifest = PackageManifest::load(&composer)?;
        manifest.remove("require-dev", &["phpunit/phpunit"])?;
        manifest.merge("require-dev", PEST_PACKAGES)?;
        manifest.save()?;

        copy_dir(&self.stubs.path("default/pest-tests/Feature"), &tests("Feature"))?;
        copy_dir(&self.stubs.path("default/pest-tests/Unit"), &tests("Unit"))?;
        copy_file(&self.stubs.path("default/pest-tests/Pest.php"), &tests("Pest.php"))?;
        copy_dir(&self.stubs.path("inertia-common/pest-tests/Feature"), &tests("Feature"))?;
        Ok(())
    }

    fn install_routes(&self) -> Result<()> {
        step("Copying routes");
        for file in ["web.php", "auth.php"] {
            copy_file(
                &self.stubs.path("inertia-common/routes").join(file),
                &self.paths.base("routes").join(file),
            )?;
        }

        let welcome = self.js(&format!("Pages/{}", self.profile.welcome_page()));
        replace_in_file("/home", "/dashboard", &welcome)?;
        replace_in_file("Home", "Dashboard", &welcome)?;
        replace_in_file(
            "/home",
            "/dashboard",
            &self.paths.app("Providers/RouteServiceProvider.php"),
        )?;
        Ok(())
    }

    fn install_build_config(&self) -> Result<()> {
        step("Copying Tailwind and Vite configuration");
        copy_file(
            &self.stubs.path("default/resources/css/app.css"),
            &self.paths.resource("css/app.css"),
        )?;
        copy_file(
            &self.stubs.path("default/postcss.config.js"),
            &self.paths.base("postcss.config.js"),
        )?;
        copy_file(
            &self.stubs.path("inertia-common/tailwind.config.js"),
            &self.paths.base("tailwind.config.js"),
        )?;
        copy_file(&self.stack_stub("vite.config.js"), &self.paths.base("vite.config.js"))?;

        let entry = format!("js/app.{}", self.profile.script_extension(Dialect::Typed));
        copy_file(
            &self.stack_stub(&format!("resources/{}", entry)),
            &self.paths.resource(&entry),
        )?;

        if self.profile.replaces_default_entry() {
            remove_file_if_exists(&self.js("app.js"))?;
        }
        Ok(())
    }

    fn install_ssr(&self) -> Result<()> {
        step("Adding server-side rendering");
        let ssr_packages = self.profile.ssr_node_packages();
        if !ssr_packages.is_empty() {
            declare_packages(&self.paths.base("package.json"), NODE_DEV_SECTION, ssr_packages)?;
        }

        let ext = self.profile.script_extension(Dialect::Typed);
        let entry = format!("ssr.{}", ext);
        copy_file(
            &self.stack_stub(&format!("resources/js/{}", entry)),
            &self.js(&entry),
        )?;

        let input = format!("input: 'resources/js/app.{}',", ext);
        replace_in_file(
            &input,
            &format!("{}\n            ssr: 'resources/js/ssr.{}',", input, ext),
            &self.paths.base("vite.config.js"),
        )?;
        replace_in_file(
            "\"vite build",
            "\"vite build && vite build --ssr",
            &self.paths.base("package.json"),
        )?;
        replace_in_file(
            "/node_modules",
            "/bootstrap/ssr\n/node_modules",
            &self.paths.base(".gitignore"),
        )?;
        Ok(())
    }

    fn install_typed(&self) -> Result<()> {
        step("Configuring TypeScript");
        declare_packages(
            &self.paths.base("package.json"),
            NODE_DEV_SECTION,
            self.profile.typed_node_packages(),
        )?;

        copy_dir(&self.stubs.path("inertia-common/resources/js/types"), &self.js("types"))?;
        copy_dir(&self.stack_stub("resources/js/types"), &self.js("types"))?;
        copy_file(&self.stack_stub("tsconfig.json"), &self.paths.base("tsconfig.json"))?;

        let bootstrap = self.js("bootstrap.js");
        if bootstrap.is_file() {
            let target = bootstrap.with_extension("ts");
            std::fs::rename(&bootstrap, &target)
                .with_context(|| format!("Failed to rename {}", bootstrap.display()))?;
        }

        if let Some(ext) = self.profile.tailwind_extension(Dialect::Typed) {
            replace_in_file(
                ".vue",
                &format!(".{}", ext),
                &self.paths.base("tailwind.config.js"),
            )?;
        }
        replace_in_file(
            "\"vite build",
            &format!("\"{} && vite build", self.profile.type_checker()),
            &self.paths.base("package.json"),
        )?;
        Ok(())
    }

    fn install_untyped(&self) -> Result<()> {
        step("Converting sources to JavaScript");
        copy_file(
            &self.stubs.path("inertia-common/jsconfig.json"),
            &self.paths.base("jsconfig.json"),
        )?;

        let typed = self.profile.script_extension(Dialect::Typed);
        let untyped = self.profile.script_extension(Dialect::Untyped);
        rename_extensions(&self.paths.resource("js"), typed, untyped)?;

        if let Some(ext) = self.profile.tailwind_extension(Dialect::Untyped) {
            replace_in_file(
                ".vue",
                &format!(".{}", ext),
                &self.paths.base("tailwind.config.js"),
            )?;
        }

        let (from, to) = (format!(".{}", typed), format!(".{}", untyped));
        replace_in_file(&from, &to, &self.paths.base("vite.config.js"))?;
        replace_in_file(&from, &to, &self.js(&format!("app.{}", untyped)))?;
        let ssr = self.js(&format!("ssr.{}", untyped));
        if ssr.is_file() {
            replace_in_file(&from, &to, &ssr)?;
        }
        replace_in_file(&from, &to, &self.paths.resource("views/app.blade.php"))?;
        Ok(())
    }

    fn prune_sources(&self) -> Result<()> {
        step(&format!("Removing {} snippets", self.options.rejected_dialect()));
        prune_tree(&self.paths.resource("js"), self.options.rejected_dialect())?;
        Ok(())
    }
}
