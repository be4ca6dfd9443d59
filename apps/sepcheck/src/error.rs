//! Error kinds raised by checks.
//!
//! `Assertion` is a violated expectation about the tree. Everything else
//! (I/O faults, bad patterns, spawn failures) is unexpected. Both abort the
//! remaining checklist.

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Assertion(String),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Unexpected(String),
}

impl CheckError {
    pub fn assertion(msg: impl Into<String>) -> Self {
        CheckError::Assertion(msg.into())
    }

    pub fn io(action: &str, path: &Path, source: io::Error) -> Self {
        CheckError::Io {
            context: format!("{} {}", action, path.display()),
            source,
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion(_))
    }
}

pub type CheckResult<T> = Result<T, CheckError>;

/// Fail with `msg` unless `cond` holds.
pub fn ensure(cond: bool, msg: impl FnOnce() -> String) -> CheckResult<()> {
    if cond {
        Ok(())
    } else {
        Err(CheckError::Assertion(msg()))
    }
}
