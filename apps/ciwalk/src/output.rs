//! Output rendering for progress lines, status lines, listings and the final
//! report.
//!
//! Everything goes through a `Reporter` wrapping any writer, so runs can be
//! captured in memory. Colors are applied only when enabled by the caller.

use crate::models::{ExecutionResult, RunReport};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator printed between the streamed run output and the summary table.
pub const SEPARATOR: &str = "----------------------------------------";

/// Decide whether to color output: `always`/`never` win, `auto` follows
/// `NO_COLOR` and whether stdout is a terminal.
pub fn use_colors(choice: &str, is_terminal: bool) -> bool {
    match choice {
        "always" => true,
        "never" => false,
        _ => is_terminal && std::env::var_os("NO_COLOR").is_none(),
    }
}

pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `<dir>/: <command>` before a command runs. Flushes so the line
    /// lands ahead of the child's own output.
    pub fn progress(&mut self, dir: &Path, command: &str) -> std::io::Result<()> {
        let label = format!("{}/:", dir.display());
        if self.color {
            writeln!(self.out, "{} {}", label.bold(), command)?;
        } else {
            writeln!(self.out, "{} {}", label, command)?;
        }
        self.out.flush()
    }

    /// Print `<dir>/: <result>` for anything that did not succeed.
    pub fn status(&mut self, dir: &Path, result: &ExecutionResult) -> std::io::Result<()> {
        let label = format!("{}/:", dir.display());
        let text = result.to_string();
        if self.color {
            writeln!(self.out, "{} {}", label.bold(), paint(result, &text))?;
        } else {
            writeln!(self.out, "{} {}", label, text)?;
        }
        self.out.flush()
    }

    /// Print one discovered directory per line.
    pub fn list(&mut self, dirs: &[PathBuf]) -> std::io::Result<()> {
        for dir in dirs {
            writeln!(self.out, "{}", dir.display())?;
        }
        self.out.flush()
    }

    /// Print the separator and a `<dir>: <status-word>` line per result.
    pub fn report(&mut self, report: &RunReport) -> std::io::Result<()> {
        writeln!(self.out, "{}", SEPARATOR)?;
        for (dir, result) in &report.results {
            let word = result.status_word();
            if self.color {
                writeln!(self.out, "{}: {}", dir.display(), paint(result, word))?;
            } else {
                writeln!(self.out, "{}: {}", dir.display(), word)?;
            }
        }
        self.out.flush()
    }
}

fn paint(result: &ExecutionResult, text: &str) -> String {
    match result {
        ExecutionResult::Success { .. } => text.green().to_string(),
        ExecutionResult::Fail { .. } => text.red().bold().to_string(),
        ExecutionResult::Ignore { .. } => text.yellow().to_string(),
        ExecutionResult::Skip { .. } => text.bright_black().to_string(),
    }
}
