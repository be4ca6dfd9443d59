//! sepcheck core library.
//!
//! Verifies that a repository was split into a PHP backend and a React
//! frontend: expected files exist, nothing leaked across, the backend entry
//! lints, the frontend manifest is sane, and the READMEs point the way.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Root discovery and effective configuration resolution.
//! - `checks`: The five checks and their fixed order.
//! - `runner`: Sequential execution with first-failure short-circuit.
//! - `models`: Expected layout and external tool settings.
//! - `output`: Status-glyph reporter.
//! - `error`: Assertion vs unexpected failures.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;
