use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;
use stack_installer_core::build::BuildCommand;
use stack_installer_core::stubs::DEFAULT_STUBS_DIR;
use stack_installer_core::{
    install, CommandRunner, Dialect, Framework, InstallOptions, PackageManager, ProjectPaths,
    StubTree,
};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use walkdir::WalkDir;

const COMPOSER_JSON: &str = r#"{
    "name": "laravel/laravel",
    "require": {
        "php": "^8.1",
        "laravel/framework": "^10.0"
    },
    "require-dev": {
        "phpunit/phpunit": "^10.0"
    }
}
"#;

const PACKAGE_JSON: &str = r#"{
    "private": true,
    "scripts": {
        "dev": "vite",
        "build": "vite build"
    },
    "devDependencies": {
        "axios": "^1.1.2",
        "vite": "^4.0.0"
    }
}
"#;

const KERNEL: &str = r#"<?php

namespace App\Http;

class Kernel extends HttpKernel
{
    protected $middlewareGroups = [
        'web' => [
            \App\Http\Middleware\EncryptCookies::class,
            \Illuminate\Routing\Middleware\SubstituteBindings::class,
        ],

        'api' => [
            \Illuminate\Routing\Middleware\SubstituteBindings::class,
        ],
    ];
}
"#;

const ROUTE_PROVIDER: &str = r#"<?php

class RouteServiceProvider extends ServiceProvider
{
    public const HOME = '/home';
}
"#;

#[derive(Default)]
struct Recorder {
    commands: Mutex<Vec<String>>,
}

impl Recorder {
    fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for Recorder {
    async fn run(&self, command: &BuildCommand, _cwd: &Path) -> Result<()> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(())
    }
}

fn laravel_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let write = |rel: &str, contents: &str| {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    };

    write("composer.json", COMPOSER_JSON);
    write("package.json", PACKAGE_JSON);
    write(".gitignore", "/node_modules\n/public/hot\n");
    write("app/Http/Kernel.php", KERNEL);
    write("app/Providers/RouteServiceProvider.php", ROUTE_PROVIDER);
    write("resources/js/app.js", "import './bootstrap';\n");
    write("resources/js/bootstrap.js", "import axios from 'axios';\nwindow.axios = axios;\n");
    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn json(root: &Path, rel: &str) -> Value {
    serde_json::from_str(&read(root, rel)).unwrap()
}

fn stubs() -> StubTree {
    StubTree::open(DEFAULT_STUBS_DIR).unwrap()
}

fn assert_no_markers(dir: &Path) {
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let contents = fs::read_to_string(entry.path()).unwrap();
        for marker in ["ts-begin", "ts-end", "ts-only", "js-begin", "js-end", "js-only"] {
            assert!(
                !contents.contains(marker),
                "{} still contains {}",
                entry.path().display(),
                marker
            );
        }
    }
}

#[tokio::test]
async fn test_react_javascript_install() {
    let project = laravel_project();
    let root = project.path();
    let runner = Recorder::default();

    let options = InstallOptions::new(Framework::React);
    let report = install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    assert_eq!(report.package_manager, PackageManager::Npm);
    assert_eq!(runner.commands(), vec!["npm install", "npm run build"]);

    let composer = json(root, "composer.json");
    assert_eq!(composer["require"]["inertiajs/inertia-laravel"], "^0.6.8");
    assert_eq!(composer["require-dev"]["phpunit/phpunit"], "^10.0");

    let package = json(root, "package.json");
    assert_eq!(package["devDependencies"]["axios"], "^1.1.2");
    assert!(package["devDependencies"]["react"].is_string());
    assert!(package["devDependencies"]["typescript"].is_null());
    assert_eq!(package["scripts"]["build"], "vite build");

    let js = root.join("resources/js");
    assert!(js.join("app.jsx").is_file());
    assert!(!js.join("app.tsx").exists());
    assert!(!js.join("app.js").exists());
    assert!(js.join("Pages/Welcome.jsx").is_file());
    assert!(js.join("Components/TextInput.jsx").is_file());
    assert!(!js.join("types").exists());
    assert!(root.join("jsconfig.json").is_file());
    assert!(!root.join("tsconfig.json").exists());
    assert_no_markers(&js);

    let text_input = read(root, "resources/js/Components/TextInput.jsx");
    assert!(!text_input.contains("InputHTMLAttributes"));
    assert!(!text_input.contains("dark:"));

    let welcome = read(root, "resources/js/Pages/Welcome.jsx");
    assert!(welcome.contains("href=\"/dashboard\""));
    assert!(welcome.contains("Dashboard"));
    assert!(!welcome.contains("PageProps"));
    assert!(welcome.contains("dark:bg-gray-900"));

    let blade = read(root, "resources/views/app.blade.php");
    assert!(blade.contains("resources/js/app.jsx"));
    assert!(!blade.contains(".tsx"));

    assert!(read(root, "vite.config.js").contains("resources/js/app.jsx"));
    assert!(read(root, "tailwind.config.js").contains("./resources/js/**/*.jsx"));
    assert!(read(root, "app/Providers/RouteServiceProvider.php").contains("'/dashboard'"));

    let kernel = read(root, "app/Http/Kernel.php");
    let bindings = kernel.find("SubstituteBindings::class,").unwrap();
    let inertia = kernel.find("HandleInertiaRequests::class").unwrap();
    let preload = kernel.find("AddLinkHeadersForPreloadedAssets::class").unwrap();
    assert!(bindings < inertia && inertia < preload);
    assert_eq!(kernel.matches("HandleInertiaRequests::class").count(), 1);

    assert!(root.join("app/Http/Middleware/HandleInertiaRequests.php").is_file());
    assert!(root.join("app/Http/Controllers/ProfileController.php").is_file());
    assert!(root.join("tests/Feature/DashboardTest.php").is_file());
    assert!(!root.join("tests/Pest.php").exists());
}

#[tokio::test]
async fn test_react_typescript_ssr_install() {
    let project = laravel_project();
    let root = project.path();
    let runner = Recorder::default();

    let options = InstallOptions {
        dialect: Dialect::Typed,
        ssr: true,
        ..InstallOptions::new(Framework::React)
    };
    install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    let package = json(root, "package.json");
    assert_eq!(
        package["scripts"]["build"],
        "tsc && vite build && vite build --ssr"
    );
    assert!(package["devDependencies"]["@types/react"].is_string());

    let js = root.join("resources/js");
    assert!(js.join("app.tsx").is_file());
    assert!(js.join("ssr.tsx").is_file());
    assert!(!js.join("app.js").exists());
    assert!(js.join("types/index.d.ts").is_file());
    assert!(js.join("types/vite-env.d.ts").is_file());
    assert_no_markers(&js);

    let text_input = read(root, "resources/js/Components/TextInput.tsx");
    assert!(text_input.contains("InputHTMLAttributes"));

    let vite = read(root, "vite.config.js");
    assert!(vite.contains("input: 'resources/js/app.tsx',\n            ssr: 'resources/js/ssr.tsx',"));
    assert!(read(root, "tailwind.config.js").contains("./resources/js/**/*.tsx"));
    assert!(!read(root, "tailwind.config.js").contains(".vue"));
}

#[tokio::test]
async fn test_react_javascript_ssr_install() {
    let project = laravel_project();
    let root = project.path();
    let runner = Recorder::default();

    let options = InstallOptions {
        ssr: true,
        ..InstallOptions::new(Framework::React)
    };
    install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    assert_eq!(
        json(root, "package.json")["scripts"]["build"],
        "vite build && vite build --ssr"
    );

    let js = root.join("resources/js");
    assert!(js.join("ssr.jsx").is_file());
    assert!(!js.join("ssr.tsx").exists());
    assert!(!js.join("types").exists());

    let ssr = read(root, "resources/js/ssr.jsx");
    assert!(ssr.contains("`./Pages/${name}.jsx`"));
    assert!(ssr.contains("import.meta.glob('./Pages/**/*.jsx')"));
    assert!(!ssr.contains(".tsx"));

    let vite = read(root, "vite.config.js");
    assert!(vite.contains("input: 'resources/js/app.jsx',\n            ssr: 'resources/js/ssr.jsx',"));
    assert!(!vite.contains(".tsx"));
    assert!(read(root, "tailwind.config.js").contains("./resources/js/**/*.jsx"));
    assert!(read(root, ".gitignore").starts_with("/bootstrap/ssr\n/node_modules"));
}

#[tokio::test]
async fn test_vue_typescript_ssr_install() {
    let project = laravel_project();
    let root = project.path();
    fs::write(root.join("pnpm-lock.yaml"), "").unwrap();
    let runner = Recorder::default();

    let options = InstallOptions {
        dialect: Dialect::Typed,
        ssr: true,
        dark: true,
        ..InstallOptions::new(Framework::Vue)
    };
    let report = install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    assert_eq!(report.package_manager, PackageManager::Pnpm);
    assert_eq!(runner.commands(), vec!["pnpm install", "pnpm run build"]);
    assert_eq!(report.next_steps().last().unwrap(), "pnpm run dev");

    let package = json(root, "package.json");
    assert_eq!(package["devDependencies"]["@vue/server-renderer"], "^3.2.31");
    assert!(package["devDependencies"]["vue-tsc"].is_string());
    assert_eq!(
        package["scripts"]["build"],
        "vue-tsc && vite build && vite build --ssr"
    );

    let js = root.join("resources/js");
    assert!(js.join("app.ts").is_file());
    assert!(js.join("ssr.ts").is_file());
    assert!(js.join("bootstrap.ts").is_file());
    assert!(!js.join("bootstrap.js").exists());
    assert!(js.join("app.js").is_file());
    assert!(js.join("types/index.d.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());
    assert_no_markers(&js);

    let text_input = read(root, "resources/js/Components/TextInput.vue");
    assert!(text_input.contains("<script setup lang=\"ts\">"));
    assert!(text_input.contains("modelValue: string;"));
    assert!(!text_input.contains("modelValue: String,"));
    assert!(text_input.contains("dark:bg-gray-900"));

    let vite = read(root, "vite.config.js");
    assert!(vite.contains("input: 'resources/js/app.ts',\n            ssr: 'resources/js/ssr.ts',"));
    assert!(read(root, ".gitignore").starts_with("/bootstrap/ssr\n/node_modules"));
    assert!(read(root, "tailwind.config.js").contains("./resources/js/**/*.vue"));
}

#[tokio::test]
async fn test_vue_javascript_strips_type_annotations() {
    let project = laravel_project();
    let root = project.path();
    let runner = Recorder::default();

    let options = InstallOptions {
        ssr: true,
        ..InstallOptions::new(Framework::Vue)
    };
    install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    let js = root.join("resources/js");
    assert!(js.join("app.js").is_file());
    assert!(js.join("ssr.js").is_file());
    assert!(!js.join("app.ts").exists());
    assert_no_markers(&js);

    let app = read(root, "resources/js/app.js");
    assert!(!app.contains("<DefineComponent>"));
    assert!(app.contains("import.meta.glob('./Pages/**/*.vue')"));

    let text_input = read(root, "resources/js/Components/TextInput.vue");
    assert!(text_input.contains("<script setup>"));
    assert!(text_input.contains("modelValue: String,"));
    assert!(!text_input.contains("HTMLInputElement | null"));
    assert!(!text_input.contains("dark:"));

    let vite = read(root, "vite.config.js");
    assert!(vite.contains("input: 'resources/js/app.js',\n            ssr: 'resources/js/ssr.js',"));
    assert!(read(root, "resources/views/app.blade.php").contains("resources/js/app.js"));
    assert_eq!(
        json(root, "package.json")["scripts"]["build"],
        "vite build && vite build --ssr"
    );
}

#[tokio::test]
async fn test_pest_replaces_phpunit() {
    let project = laravel_project();
    let root = project.path();
    let runner = Recorder::default();

    let options = InstallOptions {
        pest: true,
        ..InstallOptions::new(Framework::React)
    };
    install(&stubs(), &ProjectPaths::new(root), options, &runner)
        .await
        .unwrap();

    let composer = json(root, "composer.json");
    assert!(composer["require-dev"]["phpunit/phpunit"].is_null());
    assert_eq!(composer["require-dev"]["pestphp/pest"], "^2.0");
    assert!(root.join("tests/Pest.php").is_file());
    assert!(root.join("tests/Unit/ExampleTest.php").is_file());
    assert!(read(root, "tests/Feature/DashboardTest.php").contains("test("));
}

#[tokio::test]
async fn test_missing_kernel_aborts_before_build() {
    let project = laravel_project();
    let root = project.path();
    fs::remove_file(root.join("app/Http/Kernel.php")).unwrap();
    let runner = Recorder::default();

    let result = install(
        &stubs(),
        &ProjectPaths::new(root),
        InstallOptions::new(Framework::React),
        &runner,
    )
    .await;

    assert!(result.is_err());
    assert!(runner.commands().is_empty());
}
