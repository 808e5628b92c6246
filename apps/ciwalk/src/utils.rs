//! Small helpers shared by the binary.

use owo_colors::OwoColorize;

/// Prefix for fatal error messages on stderr.
pub fn error_prefix(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` still wins.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
