//! Shared data models for a run: the command, per-directory results and the
//! aggregated report.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The literal argument list executed in every project directory.
pub struct CommandSpec {
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(args: Vec<String>) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self { args })
    }

    pub fn program(&self) -> &str {
        &self.args[0]
    }

    pub fn args(&self) -> &[String] {
        &self.args[1..]
    }

    /// Tokens joined with `_`; config section keys are matched against this.
    pub fn section_haystack(&self) -> String {
        self.args.join("_")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of one project directory.
pub enum ExecutionResult {
    Success { command: String, code: Option<i32> },
    Fail { command: String, code: Option<i32> },
    Ignore { command: String, code: Option<i32> },
    Skip { command: String },
}

impl ExecutionResult {
    pub fn command(&self) -> &str {
        match self {
            ExecutionResult::Success { command, .. }
            | ExecutionResult::Fail { command, .. }
            | ExecutionResult::Ignore { command, .. }
            | ExecutionResult::Skip { command } => command,
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExecutionResult::Success { code, .. }
            | ExecutionResult::Fail { code, .. }
            | ExecutionResult::Ignore { code, .. } => *code,
            ExecutionResult::Skip { .. } => None,
        }
    }

    /// Word used in the summary table.
    pub fn status_word(&self) -> &'static str {
        match self {
            ExecutionResult::Success { .. } => "success",
            ExecutionResult::Fail { .. } => "failed",
            ExecutionResult::Ignore { .. } => "ignored",
            ExecutionResult::Skip { .. } => "skipped",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, ExecutionResult::Fail { .. })
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{} (exit code {})", self.status_word(), code),
            None => match self {
                ExecutionResult::Skip { .. } => f.write_str(self.status_word()),
                _ => write!(f, "{} (no exit code)", self.status_word()),
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
/// Global switches that shape a run.
pub struct RunFlags {
    /// Keep going after a `Fail` instead of stopping at the first one.
    pub ignore_fail: bool,
}

#[derive(Debug, Default)]
/// Ordered results of a run, keyed by project directory.
pub struct RunReport {
    pub results: Vec<(PathBuf, ExecutionResult)>,
    /// False when the run stopped early on a failure.
    pub completed: bool,
}

impl RunReport {
    /// 0 when nothing failed, else the code of the last `Fail` in processing
    /// order. A failure without a code (killed by a signal) counts as 1.
    pub fn exit_code(&self) -> i32 {
        self.results
            .iter()
            .rev()
            .find_map(|(_, r)| match r {
                ExecutionResult::Fail { code, .. } => Some(code.unwrap_or(1)),
                _ => None,
            })
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn count(&self, status_word: &str) -> usize {
        self.results
            .iter()
            .filter(|(_, r)| r.status_word() == status_word)
            .count()
    }
}
