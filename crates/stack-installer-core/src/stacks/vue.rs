use super::StackProfile;
use crate::config::Dialect;
use crate::packages::PackageDecl;

#[derive(Debug, Clone, Copy, Default)]
pub struct VueStack;

impl StackProfile for VueStack {
    fn stub_dir(&self) -> &'static str {
        "inertia-vue"
    }

    fn node_packages(&self) -> &'static [PackageDecl] {
        &[
            ("@inertiajs/vue3", "^1.0.2"),
            ("@tailwindcss/forms", "^0.5.3"),
            ("@vitejs/plugin-vue", "^4.0.0"),
            ("autoprefixer", "^10.4.12"),
            ("postcss", "^8.4.18"),
            ("tailwindcss", "^3.2.1"),
            ("vue", "^3.2.41"),
        ]
    }

    fn typed_node_packages(&self) -> &'static [PackageDecl] {
        &[
            ("@types/ziggy-js", "^1.3.2"),
            ("typescript", "^4.9.4"),
            ("vue-tsc", "^1.0.24"),
        ]
    }

    fn ssr_node_packages(&self) -> &'static [PackageDecl] {
        &[("@vue/server-renderer", "^3.2.31")]
    }

    fn component_extension(&self) -> &'static str {
        "vue"
    }

    fn script_extension(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Typed => "ts",
            Dialect::Untyped => "js",
        }
    }

    fn type_checker(&self) -> &'static str {
        "vue-tsc"
    }
}
