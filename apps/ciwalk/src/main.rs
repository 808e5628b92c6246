//! ciwalk CLI binary entry point.
//! Parses flags, delegates to the library pipeline and maps the outcome to a
//! process exit code.

use ciwalk::cli::Cli;
use ciwalk::output::{use_colors, Reporter};
use ciwalk::utils::{error_prefix, log_filter};
use ciwalk::{CommandSpec, RunFlags};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", log_filter(cli.verbose)),
    )
    .init();

    let color = use_colors(&cli.color, std::io::stdout().is_terminal());
    let code = match execute(&cli, color) {
        Ok(code) => code,
        Err(e) => {
            let err_color = use_colors(&cli.color, std::io::stderr().is_terminal());
            eprintln!("{} {}", error_prefix(err_color), e);
            2
        }
    };
    std::process::exit(code);
}

fn execute(cli: &Cli, color: bool) -> ciwalk::Result<i32> {
    let root = Path::new(&cli.directory);
    let mut reporter = Reporter::new(std::io::stdout().lock(), color);
    if cli.list {
        ciwalk::list(root, &mut reporter)?;
        return Ok(0);
    }

    let command = CommandSpec::new(cli.command.clone())?;
    let flags = RunFlags {
        ignore_fail: cli.ignore_fail,
    };
    let report = ciwalk::run(root, &command, flags, &mut reporter)?;
    // A fail-fast stop exits straight away with the failing code.
    if cli.report && report.completed {
        reporter.report(&report)?;
    }
    Ok(report.exit_code())
}
