//! Backend syntax check delegated to an external linter (`php -l`).
//!
//! Best-effort: a missing binary or an invocation that outlives the timeout
//! is reported as skipped, never as a failure.

use crate::error::{CheckError, CheckResult};
use crate::models::{CheckContext, Outcome, SyntaxSettings};
use crate::output::Reporter;
use crate::utils::display_rel;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a single linter invocation ended.
#[derive(Debug)]
pub enum ToolRun {
    Finished(Output),
    NotInstalled,
    TimedOut,
}

pub fn check_backend_syntax<W: Write>(
    ctx: &CheckContext,
    out: &mut Reporter<W>,
) -> CheckResult<Outcome> {
    let entry = ctx.layout.backend.root(&ctx.root).join(&ctx.syntax.entry);
    if !entry.exists() {
        return Ok(Outcome::Passed);
    }
    let shown = display_rel(&entry, &ctx.root);
    match run_tool(&ctx.syntax, &entry)? {
        ToolRun::Finished(output) if output.status.success() => {
            out.pass(&format!("Syntax check passed for {}", shown));
            Ok(Outcome::Passed)
        }
        ToolRun::Finished(output) => Err(CheckError::assertion(format!(
            "syntax error in {}: {}",
            shown,
            tool_error_text(&output)
        ))),
        ToolRun::NotInstalled => {
            let reason = format!("{} not installed, skipping syntax check", ctx.syntax.program);
            out.warn(&reason);
            Ok(Outcome::Skipped(reason))
        }
        ToolRun::TimedOut => {
            let reason = format!(
                "{} syntax check timed out after {}",
                ctx.syntax.program,
                human_duration(ctx.syntax.timeout)
            );
            out.warn(&reason);
            Ok(Outcome::Skipped(reason))
        }
    }
}

/// Spawn `<program> <flags...> <file>` and wait up to `settings.timeout`.
/// The child is killed and reaped when the deadline passes.
///
/// Output goes to anonymous temp files; a full pipe would stall the child
/// while we poll.
pub fn run_tool(settings: &SyntaxSettings, file: &Path) -> CheckResult<ToolRun> {
    let capture_err = |e: io::Error| {
        CheckError::Unexpected(format!("create capture file failed: {}", e))
    };
    let mut stdout_capture = tempfile::tempfile().map_err(capture_err)?;
    let mut stderr_capture = tempfile::tempfile().map_err(capture_err)?;
    let stdout_child = stdout_capture.try_clone().map_err(capture_err)?;
    let stderr_child = stderr_capture.try_clone().map_err(capture_err)?;

    let mut child = match Command::new(&settings.program)
        .args(&settings.flags)
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_child))
        .stderr(Stdio::from(stderr_child))
        .spawn()
    {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ToolRun::NotInstalled),
        Err(e) => {
            return Err(CheckError::Unexpected(format!(
                "failed to run {}: {}",
                settings.program, e
            )))
        }
    };

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if started.elapsed() >= settings.timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(ToolRun::TimedOut);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CheckError::Unexpected(format!(
                    "wait for {} failed: {}",
                    settings.program, e
                )));
            }
        }
    };
    let read_err = |e: io::Error| {
        CheckError::Unexpected(format!("collect {} output failed: {}", settings.program, e))
    };
    Ok(ToolRun::Finished(Output {
        status,
        stdout: read_capture(&mut stdout_capture).map_err(read_err)?,
        stderr: read_capture(&mut stderr_capture).map_err(read_err)?,
    }))
}

/// The child shares the file offset, so rewind before reading.
fn read_capture(file: &mut File) -> io::Result<Vec<u8>> {
    file.seek(SeekFrom::Start(0))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Linters report parse errors on either stream; prefer stderr.
fn tool_error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn human_duration(d: Duration) -> String {
    if d.subsec_millis() == 0 {
        format!("{}s", d.as_secs())
    } else {
        format!("{}ms", d.as_millis())
    }
}
