//! Per-project configuration from `ci.toml`.
//!
//! Each top-level table is a section whose name is matched as a substring of
//! the command tokens joined with `_`. Matching sections are applied in file
//! order, so a later section overrides an earlier one field by field:
//!
//! ```toml
//! [test]
//! ignore = true
//!
//! [cargo_test_--release]
//! skip = true
//! ```
//!
//! Defaults when the file is absent or nothing matches:
//! - `skip`: false
//! - `ignore`: false

use crate::error::{Error, Result};
use crate::models::CommandSpec;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Sidecar file name looked up inside each project directory.
pub const CONFIG_FILE: &str = "ci.toml";

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// Fields a section may set. Absent fields leave the running value alone.
pub struct SectionOverride {
    pub skip: Option<bool>,
    pub ignore: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Sections of one `ci.toml`, in declaration order.
pub struct CiConfig {
    pub sections: Vec<(String, SectionOverride)>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Fully-resolved settings for one directory and one command.
pub struct DirConfig {
    pub skip: bool,
    pub ignore: bool,
}

impl CiConfig {
    /// Parse the text of a `ci.toml`. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let parse_err = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        };
        let table: toml::Table = toml::from_str(text).map_err(|e| parse_err(e.to_string()))?;
        let mut sections = Vec::with_capacity(table.len());
        for (key, value) in table {
            if !value.is_table() {
                return Err(parse_err(format!("section `{}` must be a table", key)));
            }
            if let Some(t) = value.as_table() {
                for unknown in t.keys().filter(|k| *k != "skip" && *k != "ignore") {
                    log::debug!("{}: ignoring unknown key `{}.{}`", path.display(), key, unknown);
                }
            }
            let ov: SectionOverride = value
                .try_into()
                .map_err(|e: toml::de::Error| parse_err(format!("section `{}`: {}", key, e)))?;
            sections.push((key, ov));
        }
        Ok(Self { sections })
    }

    /// Merge every section whose key occurs in the joined command.
    pub fn resolve(&self, command: &CommandSpec) -> DirConfig {
        let haystack = command.section_haystack();
        let mut skip = None;
        let mut ignore = None;
        for (key, ov) in &self.sections {
            if !haystack.contains(key.as_str()) {
                continue;
            }
            log::debug!("section `{}` matches `{}`", key, haystack);
            skip = ov.skip.or(skip);
            ignore = ov.ignore.or(ignore);
        }
        DirConfig {
            skip: skip.unwrap_or(false),
            ignore: ignore.unwrap_or(false),
        }
    }
}

/// Load `ci.toml` from `dir` if present.
pub fn load_config(dir: &Path) -> Result<Option<CiConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let cfg = CiConfig::parse(&text, &path)?;
    log::debug!("loaded {} with {} section(s)", path.display(), cfg.sections.len());
    Ok(Some(cfg))
}

/// Resolve the effective settings for running `command` in `dir`.
pub fn resolve_effective(dir: &Path, command: &CommandSpec) -> Result<DirConfig> {
    let eff = load_config(dir)?
        .map(|cfg| cfg.resolve(command))
        .unwrap_or_default();
    log::debug!("{}: skip={} ignore={}", dir.display(), eff.skip, eff.ignore);
    Ok(eff)
}
