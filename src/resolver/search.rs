//! Executable search strategies.

use std::path::PathBuf;
use std::sync::Arc;

/// Locates an executable by name.
pub trait PathSearch: Send + Sync {
    /// Absolute path of `name`, or `None` if it cannot be found.
    fn find(&self, name: &str) -> Option<String>;
}

impl<T: PathSearch + ?Sized> PathSearch for Arc<T> {
    fn find(&self, name: &str) -> Option<String> {
        (**self).find(name)
    }
}

/// Searches directories for an executable, as `which` does.
///
/// Names containing a path separator are checked directly instead of
/// searched.
#[derive(Debug, Clone, Default)]
pub struct SystemPath {
    dirs: Option<Vec<PathBuf>>,
}

impl SystemPath {
    /// Search the process `PATH` as it is at lookup time.
    pub fn from_env() -> Self {
        Self { dirs: None }
    }

    /// Search only `dirs`, in order.
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: Some(dirs.into_iter().map(Into::into).collect()),
        }
    }
}

impl PathSearch for SystemPath {
    fn find(&self, name: &str) -> Option<String> {
        let found = match &self.dirs {
            None => which::which(name),
            Some(dirs) => {
                let paths = std::env::join_paths(dirs).ok()?;
                let cwd = std::env::current_dir().ok()?;
                which::which_in(name, Some(paths), cwd)
            }
        };

        match found {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::debug!(utility = name, error = %e, "utility not found on search path");
                None
            }
        }
    }
}
