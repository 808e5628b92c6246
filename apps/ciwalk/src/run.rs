//! The discover, configure, execute, aggregate pipeline.

use crate::config;
use crate::discover::discover;
use crate::error::Result;
use crate::exec::execute;
use crate::models::{CommandSpec, RunFlags, RunReport};
use crate::output::Reporter;
use std::io::Write;
use std::path::Path;

/// Run `command` in every project under `root`, streaming progress and
/// status lines to `reporter`.
///
/// Stops at the first `Fail` unless `flags.ignore_fail` is set; the returned
/// report is then marked incomplete. Fatal errors abort with no report.
pub fn run<W: Write>(
    root: &Path,
    command: &CommandSpec,
    flags: RunFlags,
    reporter: &mut Reporter<W>,
) -> Result<RunReport> {
    let dirs = discover(root)?;
    let mut report = RunReport {
        results: Vec::with_capacity(dirs.len()),
        completed: false,
    };
    for dir in dirs {
        let cfg = config::resolve_effective(&dir, command)?;
        let result = execute(&dir, command, cfg, reporter)?;
        if !result.is_success() {
            reporter.status(&dir, &result)?;
        }
        if result.is_fail() && !flags.ignore_fail {
            log::warn!(
                "`{}` failed in {}; stopping (pass --ignore-fail to continue)",
                result.command(),
                dir.display()
            );
            report.results.push((dir, result));
            return Ok(report);
        }
        report.results.push((dir, result));
    }
    report.completed = true;
    Ok(report)
}

/// Print the projects under `root` without touching their configuration.
pub fn list<W: Write>(root: &Path, reporter: &mut Reporter<W>) -> Result<usize> {
    let dirs = discover(root)?;
    reporter.list(&dirs)?;
    Ok(dirs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::MANIFEST;
    use crate::error::Error;
    use crate::models::ExecutionResult;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Create a project whose `code` file holds the exit code it should
    /// produce under `exit_from_file()`.
    fn project(root: &Path, name: &str, code: i32) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST), "[package]\n").unwrap();
        fs::write(dir.join("code"), code.to_string()).unwrap();
        dir
    }

    fn exit_from_file() -> CommandSpec {
        CommandSpec::new(vec![
            "sh".into(),
            "-c".into(),
            "touch ran; exit $(cat code)".into(),
        ])
        .unwrap()
    }

    fn run_capture(
        root: &Path,
        cmd: &CommandSpec,
        ignore_fail: bool,
    ) -> (Result<RunReport>, String) {
        let mut rep = Reporter::new(Vec::new(), false);
        let res = run(root, cmd, RunFlags { ignore_fail }, &mut rep);
        (res, String::from_utf8(rep.into_inner()).unwrap())
    }

    #[test]
    fn test_all_success() {
        let dir = tempdir().unwrap();
        for name in ["a", "b", "c", "d"] {
            project(dir.path(), name, 0);
        }
        let (res, out) = run_capture(dir.path(), &exit_from_file(), false);
        let report = res.unwrap();
        assert!(report.completed);
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.count("success"), 4);
        assert_eq!(report.exit_code(), 0);
        // progress lines only, in reverse walk order
        let firsts: Vec<_> = out
            .lines()
            .map(|l| l.split("/: ").next().unwrap().to_string())
            .collect();
        let expected: Vec<_> = ["d", "c", "b", "a"]
            .iter()
            .map(|n| dir.path().join(n).display().to_string())
            .collect();
        assert_eq!(firsts, expected);
    }

    #[test]
    fn test_fail_fast_stops_processing() {
        // processing order is c, b, a
        let dir = tempdir().unwrap();
        let a = project(dir.path(), "a", 0);
        let b = project(dir.path(), "b", 3);
        let c = project(dir.path(), "c", 0);
        let (res, out) = run_capture(dir.path(), &exit_from_file(), false);
        let report = res.unwrap();
        assert!(!report.completed);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].0, c);
        assert_eq!(report.results[1].0, b);
        assert!(report.results[1].1.is_fail());
        assert_eq!(report.exit_code(), 3);
        assert!(!a.join("ran").exists());
        assert!(out.contains(&format!("{}/: failed (exit code 3)", b.display())));
    }

    #[test]
    fn test_ignore_fail_continues_and_reports_last_code() {
        let dir = tempdir().unwrap();
        project(dir.path(), "c", 0);
        project(dir.path(), "b", 3);
        project(dir.path(), "a", 5);
        let (res, _) = run_capture(dir.path(), &exit_from_file(), true);
        let report = res.unwrap();
        assert!(report.completed);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.count("failed"), 2);
        assert_eq!(report.exit_code(), 5);
    }

    #[test]
    fn test_skip_and_ignore_from_config() {
        let dir = tempdir().unwrap();
        let skipped = project(dir.path(), "a", 0);
        fs::write(skipped.join(config::CONFIG_FILE), "[sh]\nskip = true\n").unwrap();
        let ignored = project(dir.path(), "b", 7);
        fs::write(ignored.join(config::CONFIG_FILE), "[exit]\nignore = true\n").unwrap();

        let (res, out) = run_capture(dir.path(), &exit_from_file(), false);
        let report = res.unwrap();
        assert!(report.completed);
        assert_eq!(
            report.results[0].1,
            ExecutionResult::Ignore {
                command: "sh -c touch ran; exit $(cat code)".into(),
                code: Some(7),
            }
        );
        assert!(matches!(report.results[1].1, ExecutionResult::Skip { .. }));
        assert!(!skipped.join("ran").exists());
        assert_eq!(report.exit_code(), 0);
        assert!(out.contains(&format!("{}/: skipped", skipped.display())));
        assert!(out.contains(&format!("{}/: ignored (exit code 7)", ignored.display())));
    }

    #[test]
    fn test_bad_config_aborts_run() {
        let dir = tempdir().unwrap();
        let p = project(dir.path(), "a", 0);
        fs::write(p.join(config::CONFIG_FILE), "not [valid").unwrap();
        let (res, _) = run_capture(dir.path(), &exit_from_file(), true);
        assert!(matches!(res, Err(Error::ConfigParse { .. })));
        assert!(!p.join("ran").exists());
    }

    #[test]
    fn test_list_ignores_config_and_command() {
        let dir = tempdir().unwrap();
        let a = project(dir.path(), "a", 0);
        let b = project(dir.path(), "b", 1);
        let c = project(dir.path(), "c", 2);
        fs::write(a.join(config::CONFIG_FILE), "garbage [").unwrap();

        let mut rep = Reporter::new(Vec::new(), false);
        assert_eq!(list(dir.path(), &mut rep).unwrap(), 3);
        let out = String::from_utf8(rep.into_inner()).unwrap();
        let expected = format!("{}\n{}\n{}\n", c.display(), b.display(), a.display());
        assert_eq!(out, expected);
        assert!(!a.join("ran").exists());
    }

    #[test]
    fn test_empty_tree_succeeds() {
        let dir = tempdir().unwrap();
        let (res, out) = run_capture(dir.path(), &exit_from_file(), false);
        let report = res.unwrap();
        assert!(report.completed);
        assert!(report.results.is_empty());
        assert_eq!(report.exit_code(), 0);
        assert!(out.is_empty());
    }
}
