//! Config loading, validation, and conversion into runtime components.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, SysutilError};
use crate::resolver::UtilityResolver;
use crate::runner::{CommandRunner, Shell};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SysutilError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SysutilError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `path` if given, else `sysutil.yaml` from the current directory
    /// if it exists, else the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        // A null document (`~`, `null`) means "no settings", same as empty.
        let config = serde_yaml::from_str::<Option<Config>>(yaml)
            .map_err(|e| SysutilError::UserError(format!("failed to parse config YAML: {}", e)))?
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SysutilError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `shell` and `shell_flag` must be non-empty
    /// - `utilities` names must be non-empty and paths must be absolute
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            return Err(SysutilError::UserError(
                "config validation failed: shell must be non-empty".to_string(),
            ));
        }

        if self.shell_flag.trim().is_empty() {
            return Err(SysutilError::UserError(
                "config validation failed: shell_flag must be non-empty".to_string(),
            ));
        }

        for (name, path) in &self.utilities {
            if name.trim().is_empty() {
                return Err(SysutilError::UserError(
                    "config validation failed: utilities entries must have a non-empty name"
                        .to_string(),
                ));
            }
            if !Path::new(path.trim()).is_absolute() {
                return Err(SysutilError::UserError(format!(
                    "config validation failed: utility '{}' must be an absolute path (found '{}')",
                    name, path
                )));
            }
        }

        Ok(())
    }

    /// The configured shell.
    pub fn shell(&self) -> Shell {
        Shell::new(self.shell.trim(), self.shell_flag.trim())
    }

    /// A runner using the configured shell and the `tracing` logger.
    pub fn runner(&self) -> CommandRunner {
        CommandRunner::new().with_shell(self.shell())
    }

    /// A resolver searching the process `PATH`, seeded with pinned utilities.
    pub fn resolver(&self) -> UtilityResolver {
        UtilityResolver::new().preload(
            self.utilities
                .iter()
                .map(|(name, path)| (name.as_str(), path.trim().to_string())),
        )
    }
}
