//! Command implementations for sysutil.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod name;
mod run;
mod which;


use crate::cli::Command;
use sysutil::config::Config;
use sysutil::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args, config),
        Command::Which(args) => which::cmd_which(args, config),
        Command::Name(args) => name::cmd_name(args),
    }
}
