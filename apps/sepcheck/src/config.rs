//! Configuration discovery and effective settings resolution.
//!
//! sepcheck reads `sepcheck.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults are the fixed split layout:
//! - `backend.dir`: `php-backend`, `backend.keyword`: `php`
//! - `frontend.dir`: `react-frontend`, `frontend.keyword`: `react`
//! - `frontend.skip`: `["node_modules", "dist"]`
//! - `syntax.program`: `php`, `syntax.flags`: `["-l"]`, `syntax.timeout_secs`: 10
//! - `color`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::models::{CheckContext, Layout, SyntaxSettings};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILES: [&str; 3] = ["sepcheck.toml", "sepcheck.yaml", "sepcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Per-subsystem section under `[backend]` / `[frontend]`.
pub struct TreeCfg {
    pub dir: Option<String>,
    pub keyword: Option<String>,
    /// Frontend only: directory names excluded from the contamination walk.
    pub skip: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// External linter section under `[syntax]`.
pub struct SyntaxCfg {
    pub program: Option<String>,
    pub flags: Option<Vec<String>>,
    pub entry: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `sepcheck.toml|yaml`.
pub struct SepcheckConfig {
    pub color: Option<bool>,
    #[serde(default)]
    pub backend: Option<TreeCfg>,
    #[serde(default)]
    pub frontend: Option<TreeCfg>,
    #[serde(default)]
    pub syntax: Option<SyntaxCfg>,
}

#[derive(Debug, Clone, Default)]
/// Values supplied on the command line; `None` defers to config/defaults.
pub struct Overrides {
    pub repo_root: Option<String>,
    pub backend_dir: Option<String>,
    pub frontend_dir: Option<String>,
    pub program: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_color: bool,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub layout: Layout,
    pub syntax: SyntaxSettings,
    pub color: bool,
}

impl Effective {
    pub fn context(&self) -> CheckContext {
        CheckContext {
            root: self.repo_root.clone(),
            layout: self.layout.clone(),
            syntax: self.syntax.clone(),
        }
    }
}

#[derive(Debug)]
/// Result of looking for a config file at the root.
pub enum Loaded {
    Found(PathBuf, SepcheckConfig),
    Invalid(PathBuf, String),
    Missing,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `sepcheck.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SepcheckConfig` from `sepcheck.toml` or `sepcheck.yaml|yml`.
pub fn load_config(root: &Path) -> Loaded {
    let toml_path = root.join("sepcheck.toml");
    if toml_path.exists() {
        return match fs::read_to_string(&toml_path) {
            Ok(s) => match toml::from_str::<SepcheckConfig>(&s) {
                Ok(cfg) => Loaded::Found(toml_path, cfg),
                Err(e) => Loaded::Invalid(toml_path, e.to_string()),
            },
            Err(e) => Loaded::Invalid(toml_path, e.to_string()),
        };
    }
    for yml in ["sepcheck.yaml", "sepcheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            return match fs::read_to_string(&p) {
                Ok(s) => match serde_yaml::from_str::<SepcheckConfig>(&s) {
                    Ok(cfg) => Loaded::Found(p, cfg),
                    Err(e) => Loaded::Invalid(p, e.to_string()),
                },
                Err(e) => Loaded::Invalid(p, e.to_string()),
            };
        }
    }
    Loaded::Missing
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides, cfg: &SepcheckConfig, repo_root: PathBuf) -> Effective {
    let mut layout = Layout::default();
    let backend = cfg.backend.clone().unwrap_or_default();
    let frontend = cfg.frontend.clone().unwrap_or_default();

    if let Some(dir) = cli.backend_dir.clone().or(backend.dir) {
        layout.backend.dir = dir;
    }
    if let Some(kw) = backend.keyword {
        layout.backend.keyword = kw;
    }
    if let Some(dir) = cli.frontend_dir.clone().or(frontend.dir) {
        layout.frontend.dir = dir;
    }
    if let Some(kw) = frontend.keyword {
        layout.frontend.keyword = kw;
    }
    if let Some(skip) = frontend.skip {
        layout.skip_dirs = skip;
    }

    let syntax_cfg = cfg.syntax.clone().unwrap_or_default();
    let defaults = SyntaxSettings::default();
    let syntax = SyntaxSettings {
        program: cli
            .program
            .clone()
            .or(syntax_cfg.program)
            .unwrap_or(defaults.program),
        flags: syntax_cfg.flags.unwrap_or(defaults.flags),
        entry: syntax_cfg.entry.unwrap_or(defaults.entry),
        timeout: cli
            .timeout_secs
            .or(syntax_cfg.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
    };

    let color = !cli.no_color && cfg.color.unwrap_or(true);

    Effective {
        repo_root,
        layout,
        syntax,
        color,
    }
}

/// Root from `--repo-root` or discovered upward from `cwd`.
pub fn resolve_repo_root(cli_repo_root: Option<&str>, cwd: &Path) -> PathBuf {
    match cli_repo_root {
        Some(r) => cwd.join(r),
        None => detect_repo_root(cwd),
    }
}
