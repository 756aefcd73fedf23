//! Error types for the relcheck CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for relcheck operations.
///
/// Each variant maps to a specific exit code. Check failures carry the full
/// list of violating paths in their message; everything else is fatal setup
/// or environment trouble.
#[derive(Error, Debug)]
pub enum RelcheckError {
    /// User provided invalid arguments or a required input is missing.
    #[error("{0}")]
    UserError(String),

    /// One or more compliance checks found violations.
    #[error("{0}")]
    CheckFailed(String),

    /// Git could not be launched or a git command failed unexpectedly.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl RelcheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelcheckError::UserError(_) => exit_codes::USER_ERROR,
            RelcheckError::CheckFailed(_) => exit_codes::CHECK_FAILURE,
            RelcheckError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for relcheck operations.
pub type Result<T> = std::result::Result<T, RelcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = RelcheckError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn check_failed_has_correct_exit_code() {
        let err = RelcheckError::CheckFailed("copyright violations".to_string());
        assert_eq!(err.exit_code(), exit_codes::CHECK_FAILURE);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = RelcheckError::GitError("ls-files failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = RelcheckError::GitError("could not launch git".to_string());
        assert_eq!(
            err.to_string(),
            "Git operation failed: could not launch git"
        );
    }
}
