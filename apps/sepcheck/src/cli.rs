//! CLI argument parsing via `clap`.

use crate::checks::CheckId;
use crate::config::Overrides;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sepcheck",
    version,
    about = "Verify a php-backend / react-frontend code split",
    long_about = "sepcheck checks that a repository was cleanly split into a PHP backend and a React frontend.\n\nRuns five checks in order (structure, mixed files, backend syntax, frontend config, READMEs) and stops at the first failure.\n\nConfiguration precedence: CLI > sepcheck.toml > defaults.",
    after_help = "Examples:\n  sepcheck\n  sepcheck run --only structure --only docs\n  sepcheck --repo-root ../game --php /usr/bin/php8.3 --timeout 20\n  sepcheck layout"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, global = true, help = "Repository root (default: detected from current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, global = true, help = "Backend directory name (default: php-backend)")]
    pub backend_dir: Option<String>,
    #[arg(long, global = true, help = "Frontend directory name (default: react-frontend)")]
    pub frontend_dir: Option<String>,
    #[arg(long = "php", global = true, value_name = "PROGRAM", help = "Syntax checker executable (default: php)")]
    pub program: Option<String>,
    #[arg(long, global = true, value_name = "SECS", help = "Syntax check timeout in seconds (default: 10)")]
    pub timeout: Option<u64>,
    #[arg(long, global = true, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            repo_root: self.repo_root.clone(),
            backend_dir: self.backend_dir.clone(),
            frontend_dir: self.frontend_dir.clone(),
            program: self.program.clone(),
            timeout_secs: self.timeout,
            no_color: self.no_color,
        }
    }
}

#[derive(Subcommand)]
/// Supported subcommands. Without one, `run` is assumed.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current sepcheck version.")]
    Version,
    /// Run the separation checks
    #[command(
        about = "Run separation checks",
        long_about = "Run the checklist in fixed order. Exits 0 when every check passes, 1 on the first failure.",
        after_help = "Examples:\n  sepcheck run\n  sepcheck run --only syntax"
    )]
    Run {
        #[arg(long, value_enum, help = "Run only these checks (repeatable; order stays fixed)")]
        only: Vec<CheckId>,
    },
    /// Print the expected layout
    #[command(
        about = "Show expected layout",
        long_about = "Print the effective expected layout after applying sepcheck.toml and CLI overrides."
    )]
    Layout,
}
