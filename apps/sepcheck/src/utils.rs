//! Small shared helpers: colored diagnostic prefixes and path display.

use crate::output::use_colors;
use owo_colors::OwoColorize;
use std::path::Path;

fn prefix(label: &str, color: bool, paint: fn(&str) -> String) -> String {
    if use_colors(color) {
        paint(label)
    } else {
        label.to_string()
    }
}

/// Prefixes honor `color` (from `--no-color` / `color = false`) and `NO_COLOR`.
pub fn error_prefix(color: bool) -> String {
    prefix("error:", color, |s| s.red().bold().to_string())
}

pub fn note_prefix(color: bool) -> String {
    prefix("note:", color, |s| s.cyan().bold().to_string())
}

pub fn info_prefix(color: bool) -> String {
    prefix("info:", color, |s| s.blue().bold().to_string())
}

/// Render `path` relative to `root` when possible, using `/` separators.
pub fn display_rel(path: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let s = rel.to_string_lossy().replace('\\', "/");
    if s.is_empty() {
        ".".to_string()
    } else {
        s
    }
}
