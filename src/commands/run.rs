//! Implementation of the `sysutil run` command.

use crate::cli::RunArgs;
use sysutil::config::Config;
use sysutil::error::{Result, SysutilError};

/// Run the command line and print its stdout.
pub fn cmd_run(args: RunArgs, config: &Config) -> Result<()> {
    let output = run_output(&args, config)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

pub(crate) fn run_output(args: &RunArgs, config: &Config) -> Result<String> {
    let command = args.command_line();
    if command.trim().is_empty() {
        return Err(SysutilError::UserError(
            "command line is empty. Pass the command to run, e.g. sysutil run 'tar --version'"
                .to_string(),
        ));
    }

    Ok(config.runner().run(&command)?)
}
