//! The five separation checks and their fixed run order.
//!
//! Each check re-reads the filesystem on its own; nothing flows between
//! them. A check returns `Ok(Outcome)` when it passes or was skipped, and
//! `Err(CheckError)` on the first violation it finds.

pub mod contamination;
pub mod docs;
pub mod frontend_config;
pub mod structure;
pub mod syntax;

#[cfg(test)]
pub(crate) mod fixture;

use crate::error::CheckResult;
use crate::models::{CheckContext, Outcome};
use crate::output::Reporter;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CheckId {
    Structure,
    Contamination,
    Syntax,
    Config,
    Docs,
}

impl CheckId {
    /// All checks in the order the runner executes them.
    pub const ALL: [CheckId; 5] = [
        CheckId::Structure,
        CheckId::Contamination,
        CheckId::Syntax,
        CheckId::Config,
        CheckId::Docs,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CheckId::Structure => "directory structure",
            CheckId::Contamination => "for mixed files",
            CheckId::Syntax => "backend syntax",
            CheckId::Config => "frontend configuration",
            CheckId::Docs => "README files",
        }
    }

    pub fn run<W: Write>(self, ctx: &CheckContext, out: &mut Reporter<W>) -> CheckResult<Outcome> {
        match self {
            CheckId::Structure => structure::check_structure(ctx, out),
            CheckId::Contamination => contamination::check_no_mixed_files(ctx, out),
            CheckId::Syntax => syntax::check_backend_syntax(ctx, out),
            CheckId::Config => frontend_config::check_frontend_config(ctx, out),
            CheckId::Docs => docs::check_readmes(ctx, out),
        }
    }
}
