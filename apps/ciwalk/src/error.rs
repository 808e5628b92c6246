//! Fatal error taxonomy for a run.
//!
//! Non-zero child exits are not errors; they become `Fail` or `Ignore`
//! results. Everything here aborts the whole run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("discovery root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("failed to walk project tree: {0}")]
    Discovery(#[from] glob::GlobError),
    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
    #[error("no command given")]
    EmptyCommand,
    #[error("failed to run `{command}` in {}: {source}", dir.display())]
    Spawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
