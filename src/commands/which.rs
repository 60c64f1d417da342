//! Implementation of the `sysutil which` command.

use crate::cli::WhichArgs;
use serde_json::{Map, Value};
use sysutil::config::Config;
use sysutil::error::{Result, SysutilError};

/// Resolve every requested name and print the results.
pub fn cmd_which(args: WhichArgs, config: &Config) -> Result<()> {
    println!("{}", render(&args, config)?);
    Ok(())
}

pub(crate) fn render(args: &WhichArgs, config: &Config) -> Result<String> {
    let resolved = config.resolver().utilities(&args.names)?;

    if args.json {
        let map: Map<String, Value> = resolved
            .into_iter()
            .map(|(name, path)| (name, Value::String(path)))
            .collect();
        serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
            SysutilError::UserError(format!("failed to serialize utilities to JSON: {}", e))
        })
    } else {
        Ok(resolved
            .iter()
            .map(|(name, path)| format!("{}: {}", name, path))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
