//! Compliance checks and their shared violation reporting types.

pub mod console;
pub mod copyright;
pub mod license;
pub mod project_name;

use std::fmt;
use std::path::Path;

/// A single failed check instance: the offending path and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path relative to the scan root (or the binary invocation description).
    pub path: String,
    /// Why the check failed for this path.
    pub reason: String,
}

impl Violation {
    /// Create a new violation record.
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Convenience constructor taking a filesystem path.
    pub fn for_path(path: &Path, reason: impl Into<String>) -> Self {
        Self::new(path.to_string_lossy(), reason)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.reason)
    }
}

/// Ordered list of violations accumulated by one check run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Short name of the check, used in the failure header.
    pub check_name: String,
    /// Violations found during the run, in traversal order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Create an empty report for the named check.
    pub fn new(check_name: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            violations: Vec::new(),
        }
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the check passed (no violations).
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Format the failure message enumerating every violating path.
    pub fn format_failures(&self) -> String {
        let mut msg = format!("Check {} in following files:\n", self.check_name);
        for violation in &self.violations {
            msg.push_str(&format!("{}\n", violation));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let report = CheckReport::new("copyright");
        assert!(report.passed());
    }

    #[test]
    fn report_with_violation_fails() {
        let mut report = CheckReport::new("copyright");
        report.push(Violation::new("src/a.cc", "copyright notice not present"));
        assert!(!report.passed());
    }

    #[test]
    fn failure_message_enumerates_paths() {
        let mut report = CheckReport::new("license");
        report.push(Violation::new("src/a.cc", "error line 3 in short license"));
        report.push(Violation::new("src/b.cc", "short license not 13 lines"));

        let msg = report.format_failures();
        assert!(msg.starts_with("Check license in following files:"));
        assert!(msg.contains("src/a.cc (error line 3 in short license)"));
        assert!(msg.contains("src/b.cc (short license not 13 lines)"));
    }
}
