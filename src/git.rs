//! Git command runner for relcheck.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. The checks use git for two questions only:
//! is a file tracked, and what year was it last committed.

use crate::error::{RelcheckError, Result};
use chrono::{Datelike, NaiveDate};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a git command execution, successful or not.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Whether the command exited with status 0.
    pub success: bool,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            success: output.status.success(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// A non-zero exit status is not an error here: callers like the tracking
/// check interpret it themselves. Failure to launch the git binary at all
/// is a `GitError` so a missing tool never silently skips every file.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            RelcheckError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok(GitOutput::from_output(&output))
}

/// Check whether a file is tracked by git.
///
/// Runs `git ls-files --error-unmatch <path>`; exit status 0 means tracked.
/// Untracked or generated files make the command exit non-zero, which is a
/// normal "skip this file" answer, not an error.
pub fn is_tracked<P: AsRef<Path>>(root: P, path: &Path) -> Result<bool> {
    let path_str = path.to_string_lossy();
    let output = run_git(root, &["ls-files", "--error-unmatch", path_str.as_ref()])?;
    Ok(output.success)
}

/// Return the year of the most recent commit touching `path`.
///
/// Runs `git log -1 --format=%ci -- <path>` and parses the leading
/// `YYYY-MM-DD` date. Returns `Ok(None)` for files with no commit history
/// (uncommitted); callers fall back to the current year.
pub fn last_commit_year<P: AsRef<Path>>(root: P, path: &Path) -> Result<Option<i32>> {
    let path_str = path.to_string_lossy();
    let output = run_git(root, &["log", "-1", "--format=%ci", "--", path_str.as_ref()])?;

    if !output.success {
        return Err(RelcheckError::GitError(format!(
            "git log failed for {}: {}",
            path.display(),
            output.stderr
        )));
    }

    if output.stdout.is_empty() {
        return Ok(None);
    }

    // %ci format: "2015-06-12 10:11:12 +0200"
    let date_part = output
        .stdout
        .split_whitespace()
        .next()
        .unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        RelcheckError::GitError(format!(
            "failed to parse commit date '{}' for {}: {}",
            output.stdout,
            path.display(),
            e
        ))
    })?;

    Ok(Some(date.year()))
}
