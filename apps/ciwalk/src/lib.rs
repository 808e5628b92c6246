//! ciwalk core library.
//!
//! Finds Cargo projects below a root and runs one command in each of them,
//! honoring per-project `ci.toml` overrides.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `discover`: Project directory discovery.
//! - `config`: Per-project `ci.toml` loading and section merging.
//! - `exec`: Running the command in one directory.
//! - `run`: The full pipeline and list mode.
//! - `models`: Command, result and report types.
//! - `output`: Progress, status and report printers.
//! - `error`: Fatal error type.
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod exec;
pub mod models;
pub mod output;
pub mod run;
pub mod utils;

pub use error::{Error, Result};
pub use models::{CommandSpec, ExecutionResult, RunFlags, RunReport};
pub use run::{list, run};
