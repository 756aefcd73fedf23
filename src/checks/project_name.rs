//! Project-name consistency validation.
//!
//! The product name must open the release README, appear in its release
//! line together with a "part of <suite>" clause, and be assigned with the
//! exact expected literal in the build settings file, alongside the
//! target-name assignment.

use crate::checks::{CheckReport, Violation};
use crate::config::CheckConfig;
use crate::error::{RelcheckError, Result};
use crate::scan::seek_needle;
use std::path::Path;

/// The project-name check over the release metadata files.
pub struct ProjectNameCheck<'a> {
    root: &'a Path,
    config: &'a CheckConfig,
}

impl<'a> ProjectNameCheck<'a> {
    pub fn new(root: &'a Path, config: &'a CheckConfig) -> Self {
        Self { root, config }
    }

    pub fn run(&self) -> Result<CheckReport> {
        let mut report = CheckReport::new("project name");
        self.check_readme(&mut report)?;
        self.check_settings(&mut report)?;
        Ok(report)
    }

    /// README: first line starts with the product name; the release line
    /// contains both the product name and the "part of" clause.
    fn check_readme(&self, report: &mut CheckReport) -> Result<()> {
        let content = self.read_file(&self.config.readme_file)?;
        let readme = self.config.readme_file.as_str();
        let mut lines = content.lines();

        match lines.next() {
            Some(first) if first.starts_with(&self.config.product_name) => {}
            _ => {
                report.push(Violation::new(
                    readme,
                    format!(
                        "first line does not start with '{}'",
                        self.config.product_name
                    ),
                ));
            }
        }

        let marker = &self.config.release_line_marker;
        let Some(release_line) =
            lines.find(|line| line.starts_with(marker.as_str()))
        else {
            report.push(Violation::new(
                readme,
                format!("release line starting with '{}' not found", marker),
            ));
            return Ok(());
        };

        if !release_line.contains(&self.config.product_name) {
            report.push(Violation::new(
                readme,
                format!(
                    "project name '{}' not in release line",
                    self.config.product_name
                ),
            ));
        }

        match self.read_partof()? {
            Some(partof) => {
                if !partof.starts_with(&self.config.product_family) {
                    report.push(Violation::new(
                        &self.config.settings_file,
                        format!(
                            "{} does not start with '{}'",
                            self.config.partof_variable, self.config.product_family
                        ),
                    ));
                }
                let clause = format!("part of {}", partof);
                if !release_line.contains(&clause) {
                    report.push(Violation::new(
                        readme,
                        format!("release line missing '{}' clause", clause),
                    ));
                }
            }
            None => {
                report.push(Violation::new(
                    &self.config.settings_file,
                    format!("{} not set", self.config.partof_variable),
                ));
            }
        }

        Ok(())
    }

    /// Settings file: the name and target variables must both be assigned,
    /// each with the exact expected literal. The found-count of present
    /// variables must equal 2, not "at least 2".
    fn check_settings(&self, report: &mut CheckReport) -> Result<()> {
        let content = self.read_file(&self.config.settings_file)?;
        let settings = self.config.settings_file.as_str();

        let name_marker = format!("set({} ", self.config.name_variable);
        let target_marker = format!("set({} ", self.config.target_variable);
        let expected_name = format!("\"{}\"", self.config.product_name);
        let expected_target = format!("\"{}\"", self.config.target_name);

        let mut name_count = 0;
        let mut target_count = 0;

        for line in content.lines() {
            if line.contains(&name_marker) {
                if !line.contains(&expected_name) {
                    report.push(Violation::new(
                        settings,
                        format!("{} is incorrect", self.config.name_variable),
                    ));
                }
                name_count += 1;
            } else if line.contains(&target_marker) {
                if !line.contains(&expected_target) {
                    report.push(Violation::new(
                        settings,
                        format!("{} is incorrect", self.config.target_variable),
                    ));
                }
                target_count += 1;
            }
        }

        let found = usize::from(name_count >= 1) + usize::from(target_count >= 1);
        if found != 2 {
            report.push(Violation::new(
                settings,
                format!("failed checking project name (found={}, expected=2)", found),
            ));
        }

        Ok(())
    }

    /// Read the "part of" suite name from the settings file, if assigned.
    fn read_partof(&self) -> Result<Option<String>> {
        let content = self.read_file(&self.config.settings_file)?;
        let marker = format!("set({} ", self.config.partof_variable);

        let mut lines = content.lines();
        let Some(line) = seek_needle(&mut lines, &marker) else {
            return Ok(None);
        };
        Ok(quoted_value(line).map(str::to_string))
    }

    fn read_file(&self, rel: &str) -> Result<String> {
        let abs_path = self.root.join(rel);
        std::fs::read_to_string(&abs_path).map_err(|e| {
            RelcheckError::UserError(format!("failed to read {}: {}", abs_path.display(), e))
        })
    }
}

/// Extract the first double-quoted value on a line.
fn quoted_value(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = start + line[start..].find('"')?;
    Some(&line[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(root: &Path, readme: &str, settings: &str) {
        std::fs::write(root.join("README.txt"), readme).unwrap();
        std::fs::create_dir_all(root.join("cmake")).unwrap();
        std::fs::write(root.join("cmake/settings.cmake"), settings).unwrap();
    }

    fn good_readme() -> &'static str {
        "MySQL Router 2.0\n\n\
         This is a release of MySQL Router, part of MySQL Fabric.\n"
    }

    fn good_settings() -> &'static str {
        "set(MYSQL_ROUTER_NAME \"MySQL Router\")\n\
         set(MYSQL_ROUTER_TARGET \"mysqlrouter\")\n\
         set(MYSQL_ROUTER_PARTOF \"MySQL Fabric\")\n"
    }

    #[test]
    fn conforming_files_pass() {
        let temp = TempDir::new().unwrap();
        write_fixture(temp.path(), good_readme(), good_settings());
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report.passed(), "violations: {:?}", report.violations);
    }

    #[test]
    fn wrong_first_line_is_reported() {
        let temp = TempDir::new().unwrap();
        let readme = good_readme().replace("MySQL Router 2.0", "Release notes");
        write_fixture(temp.path(), &readme, good_settings());
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason.contains("first line")));
    }

    #[test]
    fn missing_release_line_is_reported() {
        let temp = TempDir::new().unwrap();
        write_fixture(temp.path(), "MySQL Router 2.0\n", good_settings());
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason.contains("release line starting with")));
    }

    #[test]
    fn missing_partof_clause_is_reported() {
        let temp = TempDir::new().unwrap();
        let readme = "MySQL Router 2.0\n\nThis is a release of MySQL Router.\n";
        write_fixture(temp.path(), readme, good_settings());
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason.contains("part of MySQL Fabric")));
    }

    #[test]
    fn partof_outside_family_is_reported() {
        let temp = TempDir::new().unwrap();
        let settings = good_settings().replace("\"MySQL Fabric\"", "\"Oracle Fabric\"");
        let readme = good_readme().replace("part of MySQL Fabric", "part of Oracle Fabric");
        write_fixture(temp.path(), &readme, &settings);
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason.contains("does not start with 'MySQL'")));
    }

    #[test]
    fn doubled_name_and_missing_target_is_count_mismatch() {
        let temp = TempDir::new().unwrap();
        let settings = "set(MYSQL_ROUTER_NAME \"MySQL Router\")\n\
                        set(MYSQL_ROUTER_NAME \"MySQL Router\")\n\
                        set(MYSQL_ROUTER_PARTOF \"MySQL Fabric\")\n";
        write_fixture(temp.path(), good_readme(), settings);
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason == "failed checking project name (found=1, expected=2)"));
    }

    #[test]
    fn wrong_name_literal_is_reported() {
        let temp = TempDir::new().unwrap();
        let settings = good_settings().replace("\"MySQL Router\"", "\"MySQL Rooter\"");
        write_fixture(temp.path(), good_readme(), &settings);
        let config = CheckConfig::default();

        let report = ProjectNameCheck::new(temp.path(), &config).run().unwrap();
        assert!(report
            .violations
            .iter()
            .any(|v| v.reason == "MYSQL_ROUTER_NAME is incorrect"));
    }

    #[test]
    fn quoted_value_extraction() {
        assert_eq!(
            quoted_value("set(MYSQL_ROUTER_PARTOF \"MySQL Fabric\")"),
            Some("MySQL Fabric")
        );
        assert_eq!(quoted_value("set(FOO bar)"), None);
    }
}
