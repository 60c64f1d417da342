use crate::logger::Logger;
use crate::resolver::PathSearch;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Message,
    Warn,
}

/// Logger that keeps every entry for later assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub(crate) fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.at(LogLevel::Message)
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.at(LogLevel::Warn)
    }

    fn at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn message(&self, text: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((LogLevel::Message, text.to_string()));
    }

    fn warn(&self, text: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((LogLevel::Warn, text.to_string()));
    }
}

/// Path search over a fixed table that counts how often it is consulted.
#[derive(Debug, Default)]
pub(crate) struct CountingSearch {
    known: HashMap<String, String>,
    calls: AtomicUsize,
}

impl CountingSearch {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            known: entries
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PathSearch for CountingSearch {
    fn find(&self, name: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.known.get(name).cloned()
    }
}

/// Write an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub(crate) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
