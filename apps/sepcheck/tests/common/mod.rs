use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn write(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(p, content).expect("write fixture file");
}

/// Repository split exactly as expected. The syntax checker is pinned to a
/// missing binary so results do not depend on a local PHP install.
pub fn separated_repo() -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    let root = tmp.path();
    fs::create_dir_all(root.join(".git")).expect("mark repo root");
    write(root, "php-backend/index.php", "<?php echo 'hello'; ?>\n");
    write(root, "php-backend/styles.css", "body { margin: 0; }\n");
    write(root, "php-backend/script.js", "document.title = 'x';\n");
    write(root, "php-backend/demo.html", "<!doctype html><html></html>\n");
    write(root, "php-backend/README.md", "# Backend\nClassic PHP rendering.\n");
    write(
        root,
        "react-frontend/package.json",
        r#"{"name":"x","scripts":{},"dependencies":{"react":"^18"}}"#,
    );
    write(root, "react-frontend/vite.config.js", "export default {}\n");
    write(root, "react-frontend/index.html", "<div id=\"root\"></div>\n");
    write(root, "react-frontend/README.md", "# Frontend\nA React single page app.\n");
    fs::create_dir_all(root.join("react-frontend/src")).expect("create src");
    fs::create_dir_all(root.join("react-frontend/public")).expect("create public");
    write(
        root,
        "README.md",
        "# Split\n\n- `php-backend/`\n- `react-frontend/`\n",
    );
    write(
        root,
        "sepcheck.toml",
        "[syntax]\nprogram = \"sepcheck-missing-linter\"\n",
    );
    tmp
}

pub fn cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sepcheck").expect("binary built");
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}
