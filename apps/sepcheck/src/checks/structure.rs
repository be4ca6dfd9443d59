//! Directory-structure check: every expected file and subdirectory exists
//! in its subsystem root.

use crate::error::{ensure, CheckResult};
use crate::models::{CheckContext, Outcome, TreeLayout};
use crate::output::Reporter;
use std::io::Write;

pub fn check_structure<W: Write>(ctx: &CheckContext, out: &mut Reporter<W>) -> CheckResult<Outcome> {
    check_tree(ctx, &ctx.layout.backend, out)?;
    check_tree(ctx, &ctx.layout.frontend, out)?;
    out.pass("Directory structure test passed!");
    Ok(Outcome::Passed)
}

fn check_tree<W: Write>(
    ctx: &CheckContext,
    tree: &TreeLayout,
    out: &mut Reporter<W>,
) -> CheckResult<()> {
    let base = tree.root(&ctx.root);
    for file in &tree.files {
        ensure(base.join(file).is_file(), || {
            format!("file {} not found in {}/", file, tree.dir)
        })?;
        out.pass(&format!("Found {} in {}/", file, tree.dir));
    }
    for dir in &tree.dirs {
        ensure(base.join(dir).is_dir(), || {
            format!("directory {} not found in {}/", dir, tree.dir)
        })?;
        out.pass(&format!("Found {}/ directory in {}/", dir, tree.dir));
    }
    Ok(())
}
