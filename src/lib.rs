//! Sysutil: a controlled facade for invoking external system utilities.
//!
//! - [`runner::CommandRunner`] runs a command line, logs its output and
//!   classifies failures as [`error::SystemCallError`].
//! - [`resolver::UtilityResolver`] finds a utility on the search path and
//!   remembers the answer.
//!
//! ```no_run
//! use sysutil::resolver::UtilityResolver;
//! use sysutil::runner::CommandRunner;
//!
//! let resolver = UtilityResolver::new();
//! let tar = resolver.utility("tar")?;
//! let listing = CommandRunner::new().run(&format!("{} -tzf backup.tgz", tar))?;
//! println!("{}", listing);
//! # Ok::<(), sysutil::error::SysutilError>(())
//! ```

pub mod command_name;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logger;
pub mod resolver;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;
