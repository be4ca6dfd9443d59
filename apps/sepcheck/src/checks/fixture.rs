//! Test fixture: a correctly separated repository in a temp dir.

use crate::models::CheckContext;
use crate::output::Reporter;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PACKAGE_JSON: &str =
    r#"{"name":"x","scripts":{},"dependencies":{"react":"^18"}}"#;

pub fn write(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(p, content).unwrap();
}

/// Build the layout from the end-to-end scenario: every expected entry,
/// nothing forbidden.
pub fn separated_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "php-backend/index.php", "<?php echo 'hi'; ?>\n");
    write(root, "php-backend/styles.css", "body {}\n");
    write(root, "php-backend/script.js", "console.log(1);\n");
    write(root, "php-backend/demo.html", "<html></html>\n");
    write(root, "php-backend/README.md", "# Tic Tac Toe\nServer-rendered PHP version.\n");
    write(root, "react-frontend/package.json", PACKAGE_JSON);
    write(root, "react-frontend/vite.config.js", "export default {}\n");
    write(root, "react-frontend/index.html", "<div id=\"root\"></div>\n");
    write(root, "react-frontend/README.md", "# Tic Tac Toe\nBuilt with React.\n");
    fs::create_dir_all(root.join("react-frontend/src")).unwrap();
    fs::create_dir_all(root.join("react-frontend/public")).unwrap();
    write(
        root,
        "README.md",
        "# Tic Tac Toe\n- PHP-Backend/: classic version\n- react-frontend/: SPA\n",
    );
    dir
}

pub fn context(dir: &TempDir) -> CheckContext {
    CheckContext::new(dir.path())
}

pub fn reporter() -> Reporter<Vec<u8>> {
    Reporter::new(Vec::new(), false)
}

pub fn text(r: Reporter<Vec<u8>>) -> String {
    String::from_utf8(r.into_inner()).unwrap()
}
