//! Project discovery: every directory holding a `Cargo.toml` below the root.

use crate::error::{Error, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// File whose presence marks a project directory. Its contents are never read.
pub const MANIFEST: &str = "Cargo.toml";

/// Find project directories under `root`, in reverse walk order.
///
/// The reversal is a stand-in for dependency ordering; nested projects tend
/// to be visited before the ones that contain them. It is not a topological
/// sort. Matches reached through a symlinked directory below `root` are
/// dropped, so a link cycle cannot repeat a project.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    let base = Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/{}", base.trim_end_matches('/'), MANIFEST);
    log::debug!("discovering projects with pattern {}", pattern);

    let mut dirs = Vec::new();
    for entry in glob(&pattern)? {
        let manifest = entry?;
        if !manifest.is_file() {
            continue;
        }
        let Some(dir) = manifest.parent() else {
            continue;
        };
        if through_symlink(root, dir) {
            log::debug!("skipping {} (reached through a symlink)", dir.display());
            continue;
        }
        dirs.push(dir.to_path_buf());
    }
    dirs.reverse();
    log::info!("found {} project(s) under {}", dirs.len(), root.display());
    Ok(dirs)
}

/// True when any component of `dir` below `root` is a symlink.
fn through_symlink(root: &Path, dir: &Path) -> bool {
    for anc in dir.ancestors() {
        if anc == root || anc.as_os_str().is_empty() {
            break;
        }
        let is_link = anc
            .symlink_metadata()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if is_link {
            return true;
        }
    }
    false
}
