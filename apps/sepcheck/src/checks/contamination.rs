//! Cross-contamination check.
//!
//! The frontend tree must hold no backend-language sources outside
//! dependency/build-output subtrees, and the backend root must hold none of
//! the frontend tooling files.

use crate::error::{CheckError, CheckResult};
use crate::models::{CheckContext, Outcome};
use crate::output::Reporter;
use crate::utils::display_rel;
use glob::Pattern;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub fn check_no_mixed_files<W: Write>(
    ctx: &CheckContext,
    out: &mut Reporter<W>,
) -> CheckResult<Outcome> {
    let layout = &ctx.layout;
    let frontend = layout.frontend.root(&ctx.root);
    if let Some(found) =
        find_forbidden_source(&frontend, &layout.frontend_forbidden_patterns, &layout.skip_dirs)?
    {
        return Err(CheckError::assertion(format!(
            "backend file {} found in {} directory!",
            display_rel(&found, &ctx.root),
            layout.frontend.dir
        )));
    }

    let backend = layout.backend.root(&ctx.root);
    for file in &layout.backend_forbidden {
        if backend.join(file).exists() {
            return Err(CheckError::assertion(format!(
                "frontend file {} found in {} directory!",
                file, layout.backend.dir
            )));
        }
    }

    out.pass("No mixed files found!");
    Ok(Outcome::Passed)
}

fn is_skipped(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| skip_dirs.iter().any(|s| s == name))
            .unwrap_or(false)
}

/// Walk `root` in file-name order and return the first file whose name
/// matches any of `patterns`. Subtrees named in `skip_dirs` are pruned.
/// A missing `root` yields `None`.
pub fn find_forbidden_source(
    root: &Path,
    patterns: &[String],
    skip_dirs: &[String],
) -> CheckResult<Option<PathBuf>> {
    if !root.is_dir() {
        return Ok(None);
    }
    let compiled: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| CheckError::Unexpected(format!("invalid file pattern '{}': {}", p, e)))
        })
        .collect::<Result<_, _>>()?;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e, skip_dirs));
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            match e.into_io_error() {
                Some(io) => CheckError::io("failed to walk", &path, io),
                None => CheckError::Unexpected(format!(
                    "filesystem loop while walking {}",
                    path.display()
                )),
            }
        })?;
        // Links are not followed; a link to a file (or a dangling one) counts
        // as a file entry.
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if compiled.iter().any(|p| p.matches(&name)) {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}
