//! Documentation check: the root README points at both subsystems and each
//! subsystem README names its own stack.

use crate::error::{ensure, CheckError, CheckResult};
use crate::models::{CheckContext, Outcome};
use crate::output::Reporter;
use crate::utils::display_rel;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn check_readmes<W: Write>(ctx: &CheckContext, out: &mut Reporter<W>) -> CheckResult<Outcome> {
    let layout = &ctx.layout;

    let main = ctx.root.join(&layout.root_readme);
    let content = read_lowercase(&main, || format!("Main {} not found", layout.root_readme))?;
    for dir in [&layout.backend.dir, &layout.frontend.dir] {
        ensure(content.contains(&dir.to_lowercase()), || {
            format!("Main {} doesn't mention {}", layout.root_readme, dir)
        })?;
    }

    for tree in [&layout.backend, &layout.frontend] {
        let path = tree.root(&ctx.root).join(&tree.readme);
        let shown = display_rel(&path, &ctx.root);
        let content = read_lowercase(&path, || format!("{} not found", shown))?;
        ensure(content.contains(&tree.keyword.to_lowercase()), || {
            format!("{} doesn't mention {}", shown, tree.keyword)
        })?;
    }

    out.pass("All README files are present and contain relevant information");
    Ok(Outcome::Passed)
}

/// Read a documentation file as lowercase text. A missing file is an
/// assertion failure; any other read fault is unexpected.
fn read_lowercase(path: &Path, missing: impl FnOnce() -> String) -> CheckResult<String> {
    ensure(path.exists(), missing)?;
    fs::read_to_string(path)
        .map(|s| s.to_lowercase())
        .map_err(|e| CheckError::io("failed to read", path, e))
}
