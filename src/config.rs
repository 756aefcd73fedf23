//! Check configuration for relcheck.
//!
//! All reference values the checks compare against (product strings,
//! settings-file variable names, README section digests, ignore lists)
//! live here. Defaults match the audited product; a YAML file passed via
//! `--config` can override any field. Unknown fields in the YAML are
//! ignored for forward compatibility.

use crate::error::{RelcheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A README section identified by an anchor line and hashed for drift.
///
/// The section starts at the first line containing `needle` and spans the
/// following `lines` raw lines (newlines included in the hashed bytes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashedSection {
    /// Substring locating the section's anchor line.
    pub needle: String,
    /// Number of raw lines hashed after the anchor line.
    pub lines: usize,
    /// Expected SHA-1 hex digest of those lines.
    pub sha1: String,
}

/// Configuration for all compliance checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    // =========================================================================
    // Product identity
    // =========================================================================
    /// Human-readable product name expected in README and console output.
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Product family prefix the "part of" clause must start with.
    #[serde(default = "default_product_family")]
    pub product_family: String,

    /// Build target name; also the binary file name under `<bin_dir>/bin/`.
    #[serde(default = "default_target_name")]
    pub target_name: String,

    /// First release year, used for the console copyright years token.
    #[serde(default = "default_release_year")]
    pub release_year: i32,

    /// Tail of the copyright notice after the year list.
    #[serde(default = "default_copyright_holder")]
    pub copyright_holder: String,

    /// Prefix of the trademark line in `--help` output.
    #[serde(default = "default_trademark_needle")]
    pub trademark_needle: String,

    // =========================================================================
    // Release file layout
    // =========================================================================
    /// File whose presence marks a usable source root.
    #[serde(default = "default_root_marker")]
    pub root_marker: String,

    /// Release README, relative to the source root.
    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// Full legal text file, relative to the source root.
    #[serde(default = "default_license_file")]
    pub license_file: String,

    /// Build settings file defining the project-name variables.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,

    /// Settings variable that must be assigned the product name.
    #[serde(default = "default_name_variable")]
    pub name_variable: String,

    /// Settings variable that must be assigned the target name.
    #[serde(default = "default_target_variable")]
    pub target_variable: String,

    /// Settings variable naming the product suite this release is part of.
    #[serde(default = "default_partof_variable")]
    pub partof_variable: String,

    /// Marker phrase for the README release line.
    #[serde(default = "default_release_line_marker")]
    pub release_line_marker: String,

    // =========================================================================
    // Reference digests
    // =========================================================================
    /// Expected SHA-1 hex digest of the whole legal text file.
    #[serde(default = "default_license_sha1")]
    pub license_txt_sha1: String,

    /// FOSS exception section of the README.
    #[serde(default = "default_foss_section")]
    pub foss_exception: HashedSection,

    /// GPL disclaimer section of the README.
    #[serde(default = "default_gpl_section")]
    pub gpl_disclaimer: HashedSection,

    // =========================================================================
    // Tree walk ignore rules
    // =========================================================================
    /// File name suffixes never checked.
    #[serde(default = "default_ignored_extensions")]
    pub ignored_extensions: Vec<String>,

    /// Folder prefixes never descended into, relative to the source root.
    #[serde(default = "default_ignored_folders")]
    pub ignored_folders: Vec<String>,

    /// Exact relative paths never checked.
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,

    /// Additional relative paths skipped by the license check only.
    #[serde(default = "default_license_extra_ignored")]
    pub license_extra_ignored_files: Vec<String>,

    // =========================================================================
    // Console output
    // =========================================================================
    /// Tokens that must all appear in the `--help` usage block.
    #[serde(default = "default_usage_tokens")]
    pub usage_tokens: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            product_family: default_product_family(),
            target_name: default_target_name(),
            release_year: default_release_year(),
            copyright_holder: default_copyright_holder(),
            trademark_needle: default_trademark_needle(),
            root_marker: default_root_marker(),
            readme_file: default_readme_file(),
            license_file: default_license_file(),
            settings_file: default_settings_file(),
            name_variable: default_name_variable(),
            target_variable: default_target_variable(),
            partof_variable: default_partof_variable(),
            release_line_marker: default_release_line_marker(),
            license_txt_sha1: default_license_sha1(),
            foss_exception: default_foss_section(),
            gpl_disclaimer: default_gpl_section(),
            ignored_extensions: default_ignored_extensions(),
            ignored_folders: default_ignored_folders(),
            ignored_files: default_ignored_files(),
            license_extra_ignored_files: default_license_extra_ignored(),
            usage_tokens: default_usage_tokens(),
        }
    }
}

impl CheckConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RelcheckError::UserError(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            RelcheckError::UserError(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load the config file if given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

fn default_product_name() -> String {
    "MySQL Router".to_string()
}

fn default_product_family() -> String {
    "MySQL".to_string()
}

fn default_target_name() -> String {
    "mysqlrouter".to_string()
}

fn default_release_year() -> i32 {
    2015
}

fn default_copyright_holder() -> String {
    "Oracle and/or its affiliates. All rights reserved.".to_string()
}

fn default_trademark_needle() -> String {
    "Oracle is a registered trademark ".to_string()
}

fn default_root_marker() -> String {
    "License.txt".to_string()
}

fn default_readme_file() -> String {
    "README.txt".to_string()
}

fn default_license_file() -> String {
    "License.txt".to_string()
}

fn default_settings_file() -> String {
    "cmake/settings.cmake".to_string()
}

fn default_name_variable() -> String {
    "MYSQL_ROUTER_NAME".to_string()
}

fn default_target_variable() -> String {
    "MYSQL_ROUTER_TARGET".to_string()
}

fn default_partof_variable() -> String {
    "MYSQL_ROUTER_PARTOF".to_string()
}

fn default_release_line_marker() -> String {
    "This is a release of".to_string()
}

fn default_license_sha1() -> String {
    "06877624ea5c77efe3b7e39b0f909eda6e25a4ec".to_string()
}

fn default_foss_section() -> HashedSection {
    HashedSection {
        needle: "MySQL FOSS License Exception".to_string(),
        lines: 16,
        sha1: "d319794f726e1d8dae88227114e30761bc98b11f".to_string(),
    }
}

fn default_gpl_section() -> HashedSection {
    HashedSection {
        needle: "GPLv2 Disclaimer".to_string(),
        lines: 7,
        sha1: "7ea8fbbe1fcdf8965a3ee310f14e6eb7cb1543d0".to_string(),
    }
}

fn default_ignored_extensions() -> Vec<String> {
    [
        ".o",
        ".pyc",
        ".pyo",
        ".ini.in",
        ".cfg.in",
        ".cfg",
        ".html",
        ".css",
        ".ini",
        ".gitignore",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_ignored_folders() -> Vec<String> {
    [
        "mysql_harness/ext",
        "packaging",
        "internal",
        ".git",
        ".idea",
        "build",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_ignored_files() -> Vec<String> {
    [
        "License.txt",
        "mysql_harness/License.txt",
        "mysql_harness/Doxyfile.in",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_license_extra_ignored() -> Vec<String> {
    [
        "README.md",
        "README.txt",
        "License.txt",
        "src/router/include/README.txt",
        "mysql_harness/README.txt",
        "mysql_harness/License.txt",
        "mysql_harness/Doxyfile.in",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_usage_tokens() -> Vec<String> {
    [
        "[-v|--version]",
        "[-h|--help]",
        "[-c|--config=<path>]",
        "[-a|--extra-config=<path>]",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
