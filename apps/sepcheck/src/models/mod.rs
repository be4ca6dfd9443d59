//! Data models shared by the checks: expected layout and tool settings.

pub mod layout;
pub mod syntax;

use std::path::PathBuf;

pub use layout::{Layout, ManifestRules, TreeLayout};
pub use syntax::SyntaxSettings;

#[derive(Debug, Clone)]
/// Everything a check reads. Paths are resolved against `root`.
pub struct CheckContext {
    pub root: PathBuf,
    pub layout: Layout,
    pub syntax: SyntaxSettings,
}

impl CheckContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CheckContext {
            root: root.into(),
            layout: Layout::default(),
            syntax: SyntaxSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a check that did not fail.
pub enum Outcome {
    Passed,
    /// Best-effort check that could not run; carries the reason.
    Skipped(String),
}
