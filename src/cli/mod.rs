//! CLI argument parsing for sysutil.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Sysutil: run system utilities and resolve their paths.
///
/// Commands are executed through a shell with stdin closed. Output is
/// captured and logged; a non-zero exit status is reported as an error.
#[derive(Parser, Debug)]
#[command(name = "sysutil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./sysutil.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (debug).
    #[arg(short, long, global = true, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for sysutil.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a system command and print its stdout.
    ///
    /// A single argument is used verbatim as a full command line. Several
    /// arguments are shell-quoted and joined first.
    Run(RunArgs),

    /// Print the absolute path of one or more utilities.
    Which(WhichArgs),

    /// Print the display name derived from a command line.
    Name(NameArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Command line, or program followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    /// The command line to hand to the shell.
    pub fn command_line(&self) -> String {
        match self.command.as_slice() {
            [line] => line.clone(),
            args => shell_words::join(args),
        }
    }
}

/// Arguments for the `which` command.
#[derive(Parser, Debug)]
pub struct WhichArgs {
    /// Utility names to resolve.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Print a JSON object mapping names to paths.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `name` command.
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// Command line to inspect.
    pub command: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log filter implied by `-v`/`-q`, if either was given.
    pub fn log_filter_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}
