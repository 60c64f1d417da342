//! System command runner.
//!
//! Runs a full command line through a shell, captures stdout/stderr, logs
//! them through a [`Logger`], and classifies failures as [`SystemCallError`].
//! Callers are responsible for building a safe command line; nothing here
//! quotes or escapes it.

mod shell;


pub use shell::Shell;

use crate::command_name::command_name;
use crate::error::{ExitStatus, Result, SystemCallError};
use crate::logger::{Logger, TracingLogger};
use crate::resolver::UtilityResolver;
use std::io;
use std::process::{Output, Stdio};
use std::sync::Arc;

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// How the process terminated.
    pub status: std::process::ExitStatus,
}

impl ProcessOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            status: output.status,
        }
    }
}

/// Identifier of the host platform used in diagnostics, e.g. `x86_64-linux`.
pub fn platform() -> String {
    format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS)
}

/// Runs system utilities and reports their output through a logger.
#[derive(Clone)]
pub struct CommandRunner {
    shell: Shell,
    logger: Arc<dyn Logger>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("shell", &self.shell)
            .finish_non_exhaustive()
    }
}

impl CommandRunner {
    /// Runner using the platform shell and the `tracing` logger.
    pub fn new() -> Self {
        Self {
            shell: Shell::default(),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Replace the shell used to interpret command lines.
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Replace the logger that receives output lines.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run a command line and return its trimmed stdout.
    ///
    /// On exit status 0, stdout is logged at info level and stderr (if any)
    /// at warning level; stderr alone never fails the call. On a non-zero
    /// exit nothing is logged beyond the start line: the captured streams
    /// travel in the returned error instead.
    ///
    /// # Errors
    ///
    /// * `SystemCallError::SpawnFailure` - the shell could not be started or
    ///   its output could not be collected
    /// * `SystemCallError::NonZeroExit` - the command ran and failed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sysutil::runner::CommandRunner;
    ///
    /// let listing = CommandRunner::new().run("tar -tzf backup.tar.gz")?;
    /// println!("{}", listing);
    /// # Ok::<(), sysutil::error::SystemCallError>(())
    /// ```
    pub fn run(&self, command: &str) -> std::result::Result<String, SystemCallError> {
        let name = command_name(command);
        self.logger
            .message(&format!("Running system utility '{}'...", name));

        let output = self.execute(command)?;

        if output.status.success() {
            if !output.stdout.is_empty() {
                self.logger
                    .message(&prefix_lines(name, "STDOUT", &output.stdout));
            }
            if !output.stderr.is_empty() {
                self.logger
                    .warn(&prefix_lines(name, "STDERR", &output.stderr));
            }
            Ok(output.stdout)
        } else {
            Err(SystemCallError::NonZeroExit {
                name: name.to_string(),
                platform: platform(),
                command: command.to_string(),
                status: ExitStatus::from_std(output.status),
                stdout: output.stdout,
                stderr: output.stderr,
            })
        }
    }

    /// Resolve `name` with `resolver` and run it with `args` appended.
    ///
    /// The resolved path is quoted for the configured shell; `args` is
    /// appended verbatim.
    pub fn run_utility(&self, resolver: &UtilityResolver, name: &str, args: &str) -> Result<String> {
        let path = resolver.utility(name)?;
        let program = self.shell.quote(&path);
        let args = args.trim();

        let command = if args.is_empty() {
            program.into_owned()
        } else {
            format!("{} {}", program, args)
        };

        Ok(self.run(&command)?)
    }

    /// Spawn the command, close its stdin, and collect both output streams.
    fn execute(&self, command: &str) -> std::result::Result<ProcessOutput, SystemCallError> {
        let mut child = self
            .shell
            .command(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_failure(command, e))?;

        // The child sees EOF on its first read.
        drop(child.stdin.take());

        // Reads stdout and stderr together, so a child filling both pipes
        // cannot stall while we wait on the other one.
        let output = child
            .wait_with_output()
            .map_err(|e| spawn_failure(command, e))?;

        tracing::debug!(
            command = %command,
            status = ?output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "system command finished"
        );

        Ok(ProcessOutput::from_output(&output))
    }
}

fn spawn_failure(command: &str, source: io::Error) -> SystemCallError {
    SystemCallError::SpawnFailure {
        command: command.to_string(),
        platform: platform(),
        source,
    }
}

/// Prefix every line of `text` with `<name>:<stream>: `.
fn prefix_lines(name: &str, stream: &str, text: &str) -> String {
    text.lines()
        .map(|line| format!("{}:{}: {}", name, stream, line))
        .collect::<Vec<_>>()
        .join("\n")
}
