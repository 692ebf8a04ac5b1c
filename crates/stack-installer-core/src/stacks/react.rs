use super::StackProfile;
use crate::config::Dialect;
use crate::packages::PackageDecl;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReactStack;

impl StackProfile for ReactStack {
    fn stub_dir(&self) -> &'static str {
        "inertia-react"
    }

    fn node_packages(&self) -> &'static [PackageDecl] {
        &[
            ("@headlessui/react", "^1.4.2"),
            ("@inertiajs/react", "^1.0.2"),
            ("@tailwindcss/forms", "^0.5.3"),
            ("@vitejs/plugin-react", "^3.0.0"),
            ("autoprefixer", "^10.4.12"),
            ("postcss", "^8.4.18"),
            ("tailwindcss", "^3.2.1"),
            ("react", "^18.2.0"),
            ("react-dom", "^18.2.0"),
        ]
    }

    fn typed_node_packages(&self) -> &'static [PackageDecl] {
        &[
            ("@types/node", "^18.13.0"),
            ("@types/react", "^18.0.28"),
            ("@types/react-dom", "^18.0.10"),
            ("@types/ziggy-js", "^1.3.2"),
            ("typescript", "^4.9.4"),
        ]
    }

    fn component_extension(&self) -> &'static str {
        "tsx"
    }

    fn script_extension(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Typed => "tsx",
            Dialect::Untyped => "jsx",
        }
    }

    fn type_checker(&self) -> &'static str {
        "tsc"
    }

    fn tailwind_extension(&self, dialect: Dialect) -> Option<&'static str> {
        Some(self.script_extension(dialect))
    }

    fn replaces_default_entry(&self) -> bool {
        true
    }
}
