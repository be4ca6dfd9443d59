//! Console reporting for check progress.
//!
//! Every line starts with a status glyph: `✓` pass, `⚠` warning/skip,
//! `❌` failure, `💥` unexpected error, `🎉` overall success. Colors are
//! applied only when enabled and `NO_COLOR` is unset.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn use_colors(requested: bool) -> bool {
    requested && std::env::var_os("NO_COLOR").is_none()
}

/// Writes progress lines to any text stream. Write errors are ignored.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Reporter::new(io::stdout(), use_colors(color))
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Reporter { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Section header announcing a check.
    pub fn section(&mut self, title: &str) {
        let text = format!("Testing {}...", title);
        if self.color {
            let _ = writeln!(self.out, "{}", text.bold());
        } else {
            let _ = writeln!(self.out, "{}", text);
        }
    }

    pub fn pass(&mut self, msg: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "✓".green().bold(), msg);
        } else {
            let _ = writeln!(self.out, "✓ {}", msg);
        }
    }

    pub fn warn(&mut self, msg: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "⚠".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.out, "⚠ {}", msg);
        }
    }

    pub fn failure(&mut self, msg: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "❌ Test failed:".red().bold(), msg);
        } else {
            let _ = writeln!(self.out, "❌ Test failed: {}", msg);
        }
    }

    pub fn unexpected(&mut self, msg: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "💥 Unexpected error:".red().bold(), msg);
        } else {
            let _ = writeln!(self.out, "💥 Unexpected error: {}", msg);
        }
    }

    pub fn celebrate(&mut self, msg: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "🎉".bold(), msg.green().bold());
        } else {
            let _ = writeln!(self.out, "🎉 {}", msg);
        }
    }
}
