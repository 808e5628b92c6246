//! Run the command in one project directory and classify its exit.

use crate::config::DirConfig;
use crate::error::{Error, Result};
use crate::models::{CommandSpec, ExecutionResult};
use crate::output::Reporter;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Execute `command` in `dir` according to `cfg`.
///
/// Skipped directories print nothing and spawn nothing. Otherwise a progress
/// line is printed and the child runs to completion with inherited stdio and
/// no shell in between. A child that cannot be started is fatal.
pub fn execute<W: Write>(
    dir: &Path,
    command: &CommandSpec,
    cfg: DirConfig,
    reporter: &mut Reporter<W>,
) -> Result<ExecutionResult> {
    let shown = command.to_string();
    if cfg.skip {
        log::info!("{}: skipped by {}", dir.display(), crate::config::CONFIG_FILE);
        return Ok(ExecutionResult::Skip { command: shown });
    }

    reporter.progress(dir, &shown)?;
    let status = Command::new(command.program())
        .args(command.args())
        .current_dir(dir)
        .status()
        .map_err(|source| Error::Spawn {
            command: shown.clone(),
            dir: dir.to_path_buf(),
            source,
        })?;
    log::debug!("{}: `{}` exited with {}", dir.display(), shown, status);

    let code = status.code();
    Ok(if status.success() {
        ExecutionResult::Success {
            command: shown,
            code,
        }
    } else if cfg.ignore {
        ExecutionResult::Ignore {
            command: shown,
            code,
        }
    } else {
        ExecutionResult::Fail {
            command: shown,
            code,
        }
    })
}
