//! Error types for sysutil.
//!
//! Uses thiserror for derive macros. The two library error kinds are kept as
//! separate types so callers can match on exactly the failure they care about;
//! `SysutilError` folds them together for the CLI and for `run_utility`.

use crate::exit_codes;
use std::fmt;
use std::io;
use thiserror::Error;

/// Exit status of a child process that did not exit successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The process exited with this code.
    Code(i32),
    /// The process was terminated by a signal (Unix only).
    Signal(i32),
    /// Neither a code nor a signal was reported.
    Unknown,
}

impl ExitStatus {
    pub(crate) fn from_std(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitStatus::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitStatus::Signal(signal);
            }
        }

        ExitStatus::Unknown
    }

    /// The numeric exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        match self {
            ExitStatus::Code(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "{}", code),
            ExitStatus::Signal(signal) => write!(f, "terminated by signal {}", signal),
            ExitStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Failure while running a system command.
#[derive(Error, Debug)]
pub enum SystemCallError {
    /// The child process could not be started or communicated with.
    #[error(
        "Failed to execute system command on {platform}\n\
         Command was: {command}\n\
         Reason: {source}"
    )]
    SpawnFailure {
        command: String,
        platform: String,
        #[source]
        source: io::Error,
    },

    /// The child process ran but did not exit with status 0.
    #[error(
        "'{name}' Failed on {platform}\n\
         The following information should help to determine the problem:\n\
         Command was: {command}\n\
         Exit Status: {status}\n\
         STDOUT Messages: {}\n\
         STDERR Messages: {}",
        stream_or_none(.stdout),
        stream_or_none(.stderr)
    )]
    NonZeroExit {
        name: String,
        platform: String,
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

impl SystemCallError {
    /// The command line that failed.
    pub fn command(&self) -> &str {
        match self {
            SystemCallError::SpawnFailure { command, .. } => command,
            SystemCallError::NonZeroExit { command, .. } => command,
        }
    }

    /// The child's exit status, or `None` when the process never ran.
    pub fn exit_status(&self) -> Option<ExitStatus> {
        match self {
            SystemCallError::SpawnFailure { .. } => None,
            SystemCallError::NonZeroExit { status, .. } => Some(*status),
        }
    }
}

fn stream_or_none(text: &str) -> String {
    if text.is_empty() {
        "None".to_string()
    } else {
        format!("\n{}", text)
    }
}

/// Failure while resolving a utility on the search path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilityNotFoundError {
    /// The requested name was empty after trimming.
    #[error("Utility Name Empty")]
    EmptyName,

    /// No executable with this name exists on the search path.
    #[error(
        "Could not locate '{name}'.\n\
         Make sure the specified utility is installed\n\
         and available in your system's $PATH."
    )]
    NotFound { name: String },
}

/// Main error type for sysutil operations.
#[derive(Error, Debug)]
pub enum SysutilError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    #[error(transparent)]
    SystemCall(#[from] SystemCallError),

    #[error(transparent)]
    UtilityNotFound(#[from] UtilityNotFoundError),
}

impl SysutilError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SysutilError::UserError(_) => exit_codes::USER_ERROR,
            SysutilError::SystemCall(_) => exit_codes::SYSTEM_CALL_FAILURE,
            SysutilError::UtilityNotFound(_) => exit_codes::UTILITY_NOT_FOUND,
        }
    }
}

/// Result type alias for sysutil operations.
pub type Result<T> = std::result::Result<T, SysutilError>;
