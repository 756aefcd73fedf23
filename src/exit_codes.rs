//! Exit code constants for the relcheck CLI.
//!
//! - 0: Success (all checks passed)
//! - 1: User error (bad args, missing inputs, unusable source root)
//! - 2: Compliance check failure (violations found)
//! - 3: Git operation failure (git unavailable or command error)

/// Successful execution: every requested check passed.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing binary, or invalid source root.
pub const USER_ERROR: i32 = 1;

/// Check failure: one or more compliance violations were found.
pub const CHECK_FAILURE: i32 = 2;

/// Git operation failure: the git tool could not be launched or errored.
pub const GIT_FAILURE: i32 = 3;
