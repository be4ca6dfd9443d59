//! Fixed-order checklist runner.
//!
//! Runs the selected checks in `CheckId::ALL` order and stops at the first
//! error. The verdict is reported on the same stream as the progress lines.

use crate::checks::CheckId;
use crate::error::CheckError;
use crate::models::{CheckContext, Outcome};
use crate::output::Reporter;
use std::io::Write;

/// What happened during one run.
#[derive(Debug)]
pub struct RunReport {
    /// Checks that completed, in run order.
    pub completed: Vec<(CheckId, Outcome)>,
    /// The check that raised, with its error. `None` on success.
    pub failure: Option<(CheckId, CheckError)>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Run `only` (or every check when empty) against `ctx`.
pub fn run_checks<W: Write>(
    ctx: &CheckContext,
    only: &[CheckId],
    out: &mut Reporter<W>,
) -> RunReport {
    out.line("Running separation tests...");
    let mut completed = Vec::new();
    let selected = CheckId::ALL
        .into_iter()
        .filter(|id| only.is_empty() || only.contains(id));
    for id in selected {
        out.blank();
        out.section(id.title());
        match id.run(ctx, out) {
            Ok(outcome) => completed.push((id, outcome)),
            Err(err) => {
                out.blank();
                if err.is_assertion() {
                    out.failure(&err.to_string());
                } else {
                    out.unexpected(&err.to_string());
                }
                return RunReport {
                    completed,
                    failure: Some((id, err)),
                };
            }
        }
    }
    out.blank();
    out.celebrate("All tests passed! The code separation was successful.");
    RunReport {
        completed,
        failure: None,
    }
}
