//! Utility path resolution with a write-once cache.
//!
//! A `UtilityResolver` answers "where is `tar`?" by searching the executable
//! search path once per name. The first answer for a name is kept for the
//! lifetime of the resolver; later PATH or filesystem changes are not seen.

mod search;

#[cfg(test)]
mod tests;

pub use search::{PathSearch, SystemPath};

use crate::error::UtilityNotFoundError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Resolves utility names to absolute paths, memoizing each result.
pub struct UtilityResolver {
    cache: Mutex<HashMap<String, String>>,
    search: Box<dyn PathSearch>,
}

impl Default for UtilityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UtilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UtilityResolver")
            .field("cache", &*self.lock_cache())
            .finish_non_exhaustive()
    }
}

impl UtilityResolver {
    /// Resolver searching the process `PATH`.
    pub fn new() -> Self {
        Self::with_search(SystemPath::from_env())
    }

    /// Resolver using a custom search strategy.
    pub fn with_search(search: impl PathSearch + 'static) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            search: Box::new(search),
        }
    }

    /// Seed the cache with pinned utility locations.
    ///
    /// Pinned entries win over any later search, exactly as if they had been
    /// the first resolution. Names are trimmed; empty names are skipped.
    pub fn preload<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        {
            let mut cache = self.lock_cache();
            for (name, path) in entries {
                let name = name.as_ref().trim();
                if !name.is_empty() {
                    cache.entry(name.to_string()).or_insert_with(|| path.into());
                }
            }
        }
        self
    }

    /// Return the absolute path of the utility called `name`.
    ///
    /// # Errors
    ///
    /// * `UtilityNotFoundError::EmptyName` - `name` is empty after trimming
    /// * `UtilityNotFoundError::NotFound` - nothing on the search path matches
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sysutil::resolver::UtilityResolver;
    ///
    /// let resolver = UtilityResolver::new();
    /// let tar = resolver.utility("tar")?;
    /// assert!(tar.ends_with("tar"));
    /// # Ok::<(), sysutil::error::UtilityNotFoundError>(())
    /// ```
    pub fn utility(&self, name: &str) -> Result<String, UtilityNotFoundError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UtilityNotFoundError::EmptyName);
        }

        if let Some(path) = self.cached(name) {
            return Ok(path);
        }

        let path = self
            .search
            .find(name)
            .map(|found| found.trim_end().to_string())
            .filter(|found| !found.is_empty())
            .ok_or_else(|| UtilityNotFoundError::NotFound {
                name: name.to_string(),
            })?;

        tracing::debug!(utility = name, path = %path, "resolved system utility");

        // Another caller may have resolved the same name meanwhile; keep theirs.
        let mut cache = self.lock_cache();
        Ok(cache.entry(name.to_string()).or_insert(path).clone())
    }

    /// Resolve several names, stopping at the first failure.
    pub fn utilities<I, S>(&self, names: I) -> Result<Vec<(String, String)>, UtilityNotFoundError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.utility(name)
                    .map(|path| (name.trim().to_string(), path))
            })
            .collect()
    }

    /// The cached path for `name`, without searching.
    pub fn cached(&self, name: &str) -> Option<String> {
        self.lock_cache().get(name.trim()).cloned()
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, String>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
