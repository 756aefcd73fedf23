//! Short license block and legal text validation.
//!
//! Per file: the copyright line must be followed by a blank line and the
//! fixed 13-line short license block, compared positionally with one
//! leading comment marker stripped. Tree-wide: the full legal text file and
//! two anchored README sections are hashed and compared against reference
//! digests.

use crate::checks::{CheckReport, Violation};
use crate::config::{CheckConfig, HashedSection};
use crate::error::{RelcheckError, Result};
use crate::scan::{collect_candidates, seek_needle, IgnoreRules};
use sha1::{Digest, Sha1};
use std::path::Path;

/// The short license reference block.
///
/// Index 0 is the blank separator after the copyright line; the final entry
/// is the terminator position where comparison stops. Comparison walks
/// positions 1..13 and the counter must land exactly on 13.
const SHORT_LICENSE_LINES: [&str; 14] = [
    "",
    "This program is free software; you can redistribute it and/or modify",
    "it under the terms of the GNU General Public License as published by",
    "the Free Software Foundation; version 2 of the License.",
    "",
    "This program is distributed in the hope that it will be useful,",
    "but WITHOUT ANY WARRANTY; without even the implied warranty of",
    "MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the",
    "GNU General Public License for more details.",
    "",
    "You should have received a copy of the GNU General Public License",
    "along with this program; if not, write to the Free Software",
    "Foundation, Inc., 51 Franklin St, Fifth Floor, Boston, MA  02110-1301  USA",
    "",
];

/// Required number of compared block lines (separator + 12 content lines).
const SHORT_LICENSE_LEN: usize = 13;

/// The license check over a source tree.
pub struct LicenseCheck<'a> {
    root: &'a Path,
    config: &'a CheckConfig,
}

impl<'a> LicenseCheck<'a> {
    pub fn new(root: &'a Path, config: &'a CheckConfig) -> Self {
        Self { root, config }
    }

    /// Validate the short license block in every candidate file, then the
    /// hashed legal sections.
    pub fn run(&self) -> Result<CheckReport> {
        let rules = IgnoreRules::from_config(self.config)
            .with_extra_files(&self.config.license_extra_ignored_files);
        let mut report = CheckReport::new("license");

        for rel_path in collect_candidates(self.root, &rules)? {
            let content = self.read_file(&rel_path)?;
            if let Some(reason) = license_block_reason(&content) {
                report.push(Violation::for_path(&rel_path, reason));
            }
        }

        self.check_license_txt(&mut report)?;
        self.check_readme_section(
            &self.config.foss_exception,
            "FOSS exception in README changed?",
            "could not find start of FOSS exception",
            &mut report,
        )?;
        self.check_readme_section(
            &self.config.gpl_disclaimer,
            "GPL disclaimer in README changed?",
            "could not find start of GPL disclaimer",
            &mut report,
        )?;

        Ok(report)
    }

    /// Whole-file digest of the full legal text.
    fn check_license_txt(&self, report: &mut CheckReport) -> Result<()> {
        let content = self.read_file(Path::new(&self.config.license_file))?;
        if sha1_hex(content.as_bytes()) != self.config.license_txt_sha1 {
            report.push(Violation::new(
                &self.config.license_file,
                "legal text changed (sha1 mismatch)",
            ));
        }
        Ok(())
    }

    /// Digest of a README section anchored by its needle line.
    fn check_readme_section(
        &self,
        section: &HashedSection,
        mismatch_reason: &str,
        missing_reason: &str,
        report: &mut CheckReport,
    ) -> Result<()> {
        let content = self.read_file(Path::new(&self.config.readme_file))?;

        // Keep newlines: the digest covers the raw section bytes
        let mut lines = content.split_inclusive('\n');
        if seek_needle(&mut lines, &section.needle).is_none() {
            report.push(Violation::new(&self.config.readme_file, missing_reason));
            return Ok(());
        }

        let body: Vec<&str> = lines.by_ref().take(section.lines).collect();
        if body.len() < section.lines {
            report.push(Violation::new(
                &self.config.readme_file,
                format!("section after '{}' truncated", section.needle),
            ));
            return Ok(());
        }

        if sha1_hex(body.concat().as_bytes()) != section.sha1 {
            report.push(Violation::new(&self.config.readme_file, mismatch_reason));
        }
        Ok(())
    }

    fn read_file(&self, rel_path: &Path) -> Result<String> {
        let abs_path = self.root.join(rel_path);
        let bytes = std::fs::read(&abs_path).map_err(|e| {
            RelcheckError::UserError(format!("failed to read {}: {}", abs_path.display(), e))
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Validate the short license block of one file's content.
///
/// Returns `None` when the block is conforming, otherwise the violation
/// reason. A missing copyright line aborts the rest of the parse.
pub(crate) fn license_block_reason(content: &str) -> Option<String> {
    let mut lines = content.lines();

    if seek_needle(&mut lines, "Copyright (c)").is_none() {
        return Some("copyright notice not found".to_string());
    }

    // Always a blank line between the copyright line and the block
    let Some(line) = lines.next() else {
        return Some("no blank line after copyright".to_string());
    };
    if !strip_comment_marker(line).trim().is_empty() {
        return Some("no blank line after copyright".to_string());
    }

    let mut curr_line = 1;
    for line in lines {
        if curr_line == SHORT_LICENSE_LINES.len() - 1 {
            // Terminator position: trailing content after the block is fine
            break;
        }
        let line = strip_comment_marker(line);
        if SHORT_LICENSE_LINES[curr_line].trim() != line.trim() {
            return Some(format!("error line {} in short license", curr_line));
        }
        curr_line += 1;
    }

    if curr_line != SHORT_LICENSE_LEN {
        return Some("short license not 13 lines".to_string());
    }

    None
}

/// Strip a single leading comment marker, if present.
fn strip_comment_marker(line: &str) -> &str {
    line.strip_prefix('#').unwrap_or(line)
}

fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
