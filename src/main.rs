//! Sysutil: run system utilities and resolve their paths.
//!
//! This is the main entry point for the `sysutil` CLI. It parses arguments,
//! loads configuration, installs logging, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;
use sysutil::config::Config;
use sysutil::exit_codes;
use sysutil::logger::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            // Logging is not installed yet.
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    init_tracing(cli.log_filter_override().unwrap_or(&config.log_filter));

    match commands::dispatch(cli.command, &config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
