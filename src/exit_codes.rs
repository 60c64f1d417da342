//! Exit code constants for the sysutil CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: A system command failed to run or exited non-zero
//! - 3: A utility could not be located on the search path

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// System call failure: spawn failure or non-zero exit.
pub const SYSTEM_CALL_FAILURE: i32 = 2;

/// Utility not found: empty name or missing from the search path.
pub const UTILITY_NOT_FOUND: i32 = 3;
