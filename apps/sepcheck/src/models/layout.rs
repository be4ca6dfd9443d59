//! Expected repository layout after the backend/frontend split.
//!
//! `Layout::default()` is the fixed table the checker verifies:
//!
//! | Location | Expected entries |
//! |---|---|
//! | `php-backend/` | `index.php`, `styles.css`, `script.js`, `demo.html`, `README.md` |
//! | `react-frontend/` | `package.json`, `vite.config.js`, `index.html`, `README.md`, `src/`, `public/` |
//! | `react-frontend/` (forbidden) | `*.php` outside `node_modules`/`dist` |
//! | `php-backend/` (forbidden) | `package.json`, `vite.config.js`, `eslint.config.js` |
//! | repo root | `README.md` mentioning both directory names |

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One subsystem root and what must live inside it.
pub struct TreeLayout {
    /// Directory name relative to the repository root.
    pub dir: String,
    /// Word the subsystem README must mention (case-insensitive).
    pub keyword: String,
    pub files: Vec<String>,
    pub dirs: Vec<String>,
    pub readme: String,
}

impl TreeLayout {
    pub fn root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Requirements on the frontend package manifest.
pub struct ManifestRules {
    pub file: String,
    pub required_keys: Vec<String>,
    pub dependency_table: String,
    pub required_dependency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub backend: TreeLayout,
    pub frontend: TreeLayout,
    /// Frontend tooling files that must not appear in the backend root.
    pub backend_forbidden: Vec<String>,
    /// File name globs for backend-language sources banned from the frontend.
    pub frontend_forbidden_patterns: Vec<String>,
    /// Directory names whose subtrees are not scanned for contamination.
    pub skip_dirs: Vec<String>,
    pub manifest: ManifestRules,
    pub root_readme: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            backend: TreeLayout {
                dir: "php-backend".into(),
                keyword: "php".into(),
                files: strings(&["index.php", "styles.css", "script.js", "demo.html", "README.md"]),
                dirs: Vec::new(),
                readme: "README.md".into(),
            },
            frontend: TreeLayout {
                dir: "react-frontend".into(),
                keyword: "react".into(),
                files: strings(&["package.json", "vite.config.js", "index.html", "README.md"]),
                dirs: strings(&["src", "public"]),
                readme: "README.md".into(),
            },
            backend_forbidden: strings(&["package.json", "vite.config.js", "eslint.config.js"]),
            frontend_forbidden_patterns: strings(&["*.php"]),
            skip_dirs: strings(&["node_modules", "dist"]),
            manifest: ManifestRules {
                file: "package.json".into(),
                required_keys: strings(&["name", "scripts", "dependencies"]),
                dependency_table: "dependencies".into(),
                required_dependency: "react".into(),
            },
            root_readme: "README.md".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_split_table() {
        let l = Layout::default();
        assert_eq!(l.backend.dir, "php-backend");
        assert_eq!(l.frontend.dir, "react-frontend");
        assert_eq!(l.backend.files.len(), 5);
        assert_eq!(l.frontend.dirs, vec!["src", "public"]);
        assert!(l.backend_forbidden.contains(&"eslint.config.js".to_string()));
        assert_eq!(l.manifest.required_dependency, "react");
    }
}
