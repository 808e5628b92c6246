//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ciwalk",
    version,
    about = "Run a command in every Cargo project below a directory",
    long_about = "ciwalk finds every directory holding a Cargo.toml under --directory and runs the given command in each, in reverse discovery order.\n\nA ci.toml inside a project can skip the command or ignore its failure. Each table name is matched against the command joined with '_':\n\n  [clippy]\n  skip = true\n\n  [test]\n  ignore = true",
    after_help = "Examples:\n  ciwalk cargo build\n  ciwalk -d crates -p cargo test --release\n  ciwalk -i -p cargo clippy --all-targets\n  ciwalk --list",
    arg_required_else_help = true
)]
/// Top-level CLI options and the command to run.
pub struct Cli {
    #[arg(short = 'd', long, default_value = ".", help = "Root directory to search for projects")]
    pub directory: String,
    #[arg(
        short = 'i',
        long,
        action = clap::ArgAction::SetTrue,
        help = "Keep going after a failing project"
    )]
    pub ignore_fail: bool,
    #[arg(
        short = 'l',
        long,
        action = clap::ArgAction::SetTrue,
        help = "Only list project directories, then exit"
    )]
    pub list: bool,
    #[arg(
        short = 'p',
        long,
        action = clap::ArgAction::SetTrue,
        help = "Print a per-project summary at the end"
    )]
    pub report: bool,
    #[arg(
        long,
        default_value = "auto",
        value_parser = ["auto", "always", "never"],
        help = "Colorize output: auto|always|never"
    )]
    pub color: String,
    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
    #[arg(
        trailing_var_arg = true,
        num_args = 1..,
        allow_hyphen_values = true,
        required_unless_present = "list",
        help = "Command and arguments to run in each project"
    )]
    pub command: Vec<String>,
}
