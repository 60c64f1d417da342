//! Implementation of the `sysutil name` command.

use crate::cli::NameArgs;
use sysutil::command_name::command_name;
use sysutil::error::Result;

pub fn cmd_name(args: NameArgs) -> Result<()> {
    println!("{}", command_name(&args.command));
    Ok(())
}
