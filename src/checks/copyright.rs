//! Copyright notice validation.
//!
//! Every tracked, non-ignored, non-empty file under the source root must
//! carry a copyright line whose year set contains the file's effective
//! year: the year of its last commit, or the current year for files not
//! yet committed.

use crate::checks::{CheckReport, Violation};
use crate::config::CheckConfig;
use crate::error::{RelcheckError, Result};
use crate::git;
use crate::scan::{collect_candidates, IgnoreRules};
use chrono::{Datelike, Local};
use regex::Regex;
use std::path::Path;

/// The copyright check over a source tree.
pub struct CopyrightCheck<'a> {
    root: &'a Path,
    config: &'a CheckConfig,
    /// Explicit year overriding git history (CLI `--year`).
    explicit_year: Option<i32>,
}

impl<'a> CopyrightCheck<'a> {
    pub fn new(root: &'a Path, config: &'a CheckConfig) -> Self {
        Self {
            root,
            config,
            explicit_year: None,
        }
    }

    /// Use a fixed year instead of per-file commit history.
    pub fn with_explicit_year(mut self, year: Option<i32>) -> Self {
        self.explicit_year = year;
        self
    }

    /// Walk the tree and validate every candidate file.
    pub fn run(&self) -> Result<CheckReport> {
        let pattern = notice_pattern(&self.config.copyright_holder)?;
        let rules = IgnoreRules::from_config(self.config);
        let mut report = CheckReport::new("copyright");

        for rel_path in collect_candidates(self.root, &rules)? {
            if let Some(violation) = self.check_file(&rel_path, &pattern)? {
                report.push(violation);
            }
        }

        Ok(report)
    }

    fn check_file(&self, rel_path: &Path, pattern: &Regex) -> Result<Option<Violation>> {
        let abs_path = self.root.join(rel_path);
        let bytes = std::fs::read(&abs_path).map_err(|e| {
            RelcheckError::UserError(format!("failed to read {}: {}", abs_path.display(), e))
        })?;
        let content = String::from_utf8_lossy(&bytes);

        for line in content.lines() {
            let Some(captures) = pattern.captures(line) else {
                continue;
            };

            let year = self.effective_year(&abs_path)?.to_string();
            let has_year = captures
                .iter()
                .skip(1)
                .flatten()
                .any(|m| m.as_str() == year);

            if has_year {
                return Ok(None);
            }
            return Ok(Some(Violation::for_path(
                rel_path,
                format!("year {} missing, file changed", year),
            )));
        }

        Ok(Some(Violation::for_path(
            rel_path,
            "copyright notice not present",
        )))
    }

    fn effective_year(&self, abs_path: &Path) -> Result<i32> {
        if let Some(year) = self.explicit_year {
            return Ok(year);
        }

        match git::last_commit_year(self.root, abs_path)? {
            Some(year) => Ok(year),
            // Uncommitted file: validate against today's year
            None => Ok(Local::now().year()),
        }
    }
}

/// Compile the notice pattern for the configured holder text.
///
/// Matches one mandatory and one optional four-digit year, each followed by
/// a comma and space, anchored at the end of the line.
fn notice_pattern(holder: &str) -> Result<Regex> {
    let pattern = format!(
        r"Copyright \(c\) (\d{{4}}), (?:(\d{{4}}), )?{}$",
        regex::escape(holder)
    );
    Regex::new(&pattern)
        .map_err(|e| RelcheckError::UserError(format!("invalid copyright pattern: {}", e)))
}
