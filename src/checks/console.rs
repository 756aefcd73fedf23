//! Console output validation for the compiled product binary.
//!
//! Invokes the binary with `--help` and with no arguments and checks the
//! structure of its output: copyright years token, trademark line, default
//! configuration file list, usage block, and the option/description pairs.

use crate::checks::{CheckReport, Violation};
use crate::config::CheckConfig;
use crate::error::{RelcheckError, Result};
use chrono::{Datelike, Local};
use std::path::Path;
use std::process::Command;

/// The console-output check against one binary.
pub struct ConsoleCheck<'a> {
    binary: &'a Path,
    config: &'a CheckConfig,
    current_year: i32,
}

impl<'a> ConsoleCheck<'a> {
    pub fn new(binary: &'a Path, config: &'a CheckConfig) -> Self {
        Self {
            binary,
            config,
            current_year: Local::now().year(),
        }
    }

    /// Pin the "current" year; tests use this to make the years token
    /// deterministic.
    #[cfg(test)]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn run(&self) -> Result<CheckReport> {
        let mut report = CheckReport::new("console output");

        let help = self.invoke(&["--help"])?;
        let help_label = format!("{} --help", self.binary.display());
        let years = expected_years_token(self.config.release_year, self.current_year);

        for reason in [
            copyright_line_reason(&help, &years),
            trademark_reason(&help, &self.config.trademark_needle),
            config_list_reason(&help),
            usage_reason(&help, &self.config.usage_tokens),
            options_reason(&help),
        ]
        .into_iter()
        .flatten()
        {
            report.push(Violation::new(help_label.as_str(), reason));
        }

        let bare = self.invoke(&[])?;
        let bare_label = self.binary.display().to_string();
        match bare.first() {
            Some(first) if first.starts_with(&self.config.product_name) => {}
            _ => {
                report.push(Violation::new(
                    bare_label,
                    format!(
                        "first line does not start with '{}'",
                        self.config.product_name
                    ),
                ));
            }
        }

        Ok(report)
    }

    /// Spawn the binary and capture its stdout as lines.
    ///
    /// The exit status is not inspected: a binary invoked without a usable
    /// configuration may exit non-zero while still printing its banner.
    fn invoke(&self, args: &[&str]) -> Result<Vec<String>> {
        let output = Command::new(self.binary).args(args).output().map_err(|e| {
            RelcheckError::UserError(format!(
                "failed to execute {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// The years token expected in the first `--help` line.
///
/// A single year when the current year is the release year, otherwise the
/// release/current pair.
fn expected_years_token(release_year: i32, current_year: i32) -> String {
    if current_year == release_year {
        format!("{},", release_year)
    } else {
        format!("{}, {},", release_year, current_year)
    }
}

fn copyright_line_reason(lines: &[String], years_token: &str) -> Option<String> {
    let Some(first) = lines.first() else {
        return Some("no output".to_string());
    };
    if !first.starts_with("Copyright ") {
        return Some("first line is not a copyright notice".to_string());
    }
    if !first.contains(years_token) {
        return Some(format!("copyright years '{}' not found", years_token));
    }
    None
}

fn trademark_reason(lines: &[String], needle: &str) -> Option<String> {
    match lines.get(2) {
        Some(line) if line.starts_with(needle) => None,
        _ => Some("trademark notice not found".to_string()),
    }
}

/// The `Configuration read` section must list at least two indented paths
/// before the first blank line.
fn config_list_reason(lines: &[String]) -> Option<String> {
    let mut found = false;
    let mut files = Vec::new();

    for line in lines {
        if line.starts_with("Configuration read") {
            found = true;
            continue;
        }
        if found {
            if line.trim().is_empty() {
                break;
            }
            if line.starts_with("  ") {
                files.push(line.trim());
            }
        }
    }

    if !found {
        return Some("list of configuration files missing".to_string());
    }
    if files.len() < 2 {
        return Some("failed reading list of configuration files".to_string());
    }
    None
}

/// The `Usage: ` block must precede the `Options:` block and contain every
/// expected usage token.
fn usage_reason(lines: &[String], tokens: &[String]) -> Option<String> {
    let mut found = false;
    let mut usage_lines = Vec::new();

    for line in lines {
        if line.starts_with("Options:") {
            break;
        }
        if line.starts_with("Usage: ") || found {
            usage_lines.push(line.as_str());
            found = true;
        }
    }

    if !found {
        return Some("line with usage not found".to_string());
    }

    let usage = usage_lines.join("\n");
    for token in tokens {
        if !usage.contains(token.as_str()) {
            return Some(format!("usage is missing '{}'", token));
        }
    }
    None
}

/// Parse the `Options:` block into (option names, description lines) pairs.
///
/// An option line starts with two spaces and a dash; its description lines
/// are indented by four spaces. A blank line ends the block.
fn options_reason(lines: &[String]) -> Option<String> {
    let mut found = false;
    let mut options: Vec<(String, Vec<String>)> = Vec::new();
    let mut names_line: Option<String> = None;
    let mut desc: Vec<String> = Vec::new();

    for line in lines {
        if !found {
            if line.starts_with("Options:") {
                found = true;
            }
            continue;
        }
        if line.trim().is_empty() {
            if let Some(names) = names_line.take() {
                options.push((names, std::mem::take(&mut desc)));
            }
            break;
        }
        if line.starts_with("  -") {
            if let Some(names) = names_line.take() {
                options.push((names, std::mem::take(&mut desc)));
            }
            names_line = Some(line.trim().to_string());
        } else if names_line.is_some() && line.starts_with("    ") {
            desc.push(line.trim().to_string());
        }
    }
    if let Some(names) = names_line.take() {
        options.push((names, desc));
    }

    if !found {
        return Some("list options not available".to_string());
    }
    if options.len() < 3 {
        return Some("failed reading list options with descriptions".to_string());
    }
    for (names, desc) in &options {
        if desc.is_empty() {
            return Some(format!("option '{}' did not have description", names));
        }
    }
    None
}
