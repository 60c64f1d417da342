//! Config struct definition and default implementation.

use crate::runner::Shell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name looked up in the current directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sysutil.yaml";

/// Configuration for running and resolving system utilities.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program used to interpret command lines (default: `sh`, or `cmd` on Windows).
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Flag that hands the command line to the shell (default: `-c`, or `/C`).
    #[serde(default = "default_shell_flag")]
    pub shell_flag: String,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Pinned utility locations, keyed by utility name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub utilities: BTreeMap<String, String>,
}

// Default value functions for serde
fn default_shell() -> String {
    Shell::default().program
}
fn default_shell_flag() -> String {
    Shell::default().flag
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_flag: default_shell_flag(),
            log_filter: default_log_filter(),
            utilities: BTreeMap::new(),
        }
    }
}
