mod common;

use common::{cmd, separated_repo, write};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn separated_repo_passes_and_exits_zero() {
    let repo = separated_repo();
    cmd(repo.path())
        .assert()
        .success()
        .stdout(contains("✓ Found index.php in php-backend/"))
        .stdout(contains("⚠ sepcheck-missing-linter not installed"))
        .stdout(contains("✓ Frontend configuration is valid"))
        .stdout(contains("🎉 All tests passed!"));
}

#[test]
fn runs_from_nested_directory() {
    let repo = separated_repo();
    cmd(&repo.path().join("react-frontend/src"))
        .arg("run")
        .assert()
        .success();
}

#[test]
fn missing_file_fails_before_later_checks() {
    let repo = separated_repo();
    fs::remove_file(repo.path().join("react-frontend/vite.config.js")).unwrap();
    cmd(repo.path())
        .assert()
        .code(1)
        .stdout(contains(
            "❌ Test failed: file vite.config.js not found in react-frontend/",
        ))
        .stdout(contains("Testing for mixed files").not())
        .stdout(contains("🎉").not());
}

#[test]
fn php_in_frontend_fails_but_not_in_node_modules() {
    let repo = separated_repo();
    write(repo.path(), "react-frontend/node_modules/lib/x.php", "<?php ?>");
    cmd(repo.path()).assert().success();

    write(repo.path(), "react-frontend/src/server.php", "<?php ?>");
    cmd(repo.path())
        .assert()
        .code(1)
        .stdout(contains("react-frontend/src/server.php"));
}

#[test]
fn malformed_manifest_fails() {
    let repo = separated_repo();
    write(repo.path(), "react-frontend/package.json", "{ not json");
    cmd(repo.path())
        .assert()
        .code(1)
        .stdout(contains("Invalid JSON in package.json"));
}

#[test]
fn root_readme_must_name_both_dirs() {
    let repo = separated_repo();
    write(repo.path(), "README.md", "# Split\nOnly PHP-BACKEND here.\n");
    cmd(repo.path())
        .assert()
        .code(1)
        .stdout(contains("Main README.md doesn't mention react-frontend"));
}

#[cfg(unix)]
#[test]
fn syntax_errors_from_linter_fail_the_run() {
    let repo = separated_repo();
    write(
        repo.path(),
        "sepcheck.toml",
        "[syntax]\nprogram = \"sh\"\nflags = [\"-c\", \"echo 'Parse error in index.php' >&2; exit 255\"]\n",
    );
    cmd(repo.path())
        .assert()
        .code(1)
        .stdout(contains(
            "❌ Test failed: syntax error in php-backend/index.php: Parse error in index.php",
        ));
}

#[test]
fn directory_overrides_from_cli() {
    let repo = separated_repo();
    fs::rename(repo.path().join("php-backend"), repo.path().join("server")).unwrap();
    write(repo.path(), "README.md", "server/ and react-frontend/\n");
    cmd(repo.path()).assert().code(1);
    cmd(repo.path())
        .args(["--backend-dir", "server"])
        .assert()
        .success();
}

#[test]
fn only_selected_checks_run() {
    let repo = separated_repo();
    fs::remove_file(repo.path().join("README.md")).unwrap();
    cmd(repo.path())
        .args(["run", "--only", "structure", "--only", "config"])
        .assert()
        .success()
        .stdout(contains("Testing README files").not());
}

#[test]
fn layout_prints_expected_entries() {
    let repo = separated_repo();
    cmd(repo.path())
        .arg("layout")
        .assert()
        .success()
        .stdout(contains(
            "react-frontend/: package.json, vite.config.js, index.html, README.md, src/, public/",
        ))
        .stdout(contains("php-backend/ (forbidden): package.json, vite.config.js, eslint.config.js"));
}

#[test]
fn version_prints_crate_version() {
    let repo = separated_repo();
    cmd(repo.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_flag_plain_stderr_prefixes() {
    let repo = separated_repo();
    write(repo.path(), "sepcheck.toml", "[syntax\n");
    cmd(repo.path())
        .env_remove("NO_COLOR")
        .args(["--no-color", "--php", "sepcheck-missing-linter"])
        .assert()
        .success()
        .stderr(contains("note: ignoring invalid"))
        .stderr(contains("info: checking"))
        .stderr(contains("\u{1b}[").not());
}
