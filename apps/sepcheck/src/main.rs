//! sepcheck CLI binary entry point.
//! Resolves configuration, moves to the repository root and runs the checks.

use clap::Parser;
use sepcheck::cli::{Cli, Commands};
use sepcheck::config::{self, Loaded};
use sepcheck::models::Layout;
use sepcheck::output::Reporter;
use sepcheck::{runner, utils};
use std::process;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Some(Commands::Version) => println!("{}", env!("CARGO_PKG_VERSION")),
        Some(Commands::Layout) => print_layout(&resolve(&cli).layout),
        Some(Commands::Run { ref only }) => run(&resolve(&cli), only),
        None => run(&resolve(&cli), &[]),
    }
}

/// Locate the repository root and merge config with CLI overrides.
fn resolve(cli: &Cli) -> config::Effective {
    let color = !cli.no_color;
    let cwd = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{} cannot read current directory: {}", utils::error_prefix(color), e);
            process::exit(1);
        }
    };
    let overrides = cli.overrides();
    let repo_root = config::resolve_repo_root(overrides.repo_root.as_deref(), &cwd);
    if !repo_root.is_dir() {
        eprintln!(
            "{} repository root not found: {}",
            utils::error_prefix(color),
            repo_root.display()
        );
        process::exit(1);
    }

    let cfg = match config::load_config(&repo_root) {
        Loaded::Found(_, cfg) => cfg,
        Loaded::Invalid(path, err) => {
            eprintln!(
                "{} ignoring invalid {}: {}; using defaults.",
                utils::note_prefix(color),
                path.display(),
                err
            );
            Default::default()
        }
        Loaded::Missing => Default::default(),
    };
    config::resolve_effective(&overrides, &cfg, repo_root)
}

fn run(eff: &config::Effective, only: &[sepcheck::checks::CheckId]) {
    // Working directory is the repository root while checks run.
    if let Err(e) = std::env::set_current_dir(&eff.repo_root) {
        eprintln!(
            "{} cannot enter {}: {}",
            utils::error_prefix(eff.color),
            eff.repo_root.display(),
            e
        );
        process::exit(1);
    }
    eprintln!(
        "{} checking {}",
        utils::info_prefix(eff.color),
        eff.repo_root.display()
    );
    let ctx = eff.context();
    let mut out = Reporter::stdout(eff.color);
    let report = runner::run_checks(&ctx, only, &mut out);
    process::exit(report.exit_code());
}

fn print_layout(layout: &Layout) {
    let b = &layout.backend;
    let f = &layout.frontend;
    let mut frontend_entries = f.files.clone();
    frontend_entries.extend(f.dirs.iter().map(|d| format!("{}/", d)));
    println!("{}/: {}", b.dir, b.files.join(", "));
    println!("{}/: {}", f.dir, frontend_entries.join(", "));
    println!(
        "{}/ (forbidden): {} outside {}",
        f.dir,
        layout.frontend_forbidden_patterns.join(", "),
        layout.skip_dirs.join(", ")
    );
    println!(
        "{}/ (forbidden): {}",
        b.dir,
        layout.backend_forbidden.join(", ")
    );
    println!(
        "./: {} mentioning {} and {}",
        layout.root_readme, b.dir, f.dir
    );
}
