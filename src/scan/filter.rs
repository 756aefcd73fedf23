//! Ignore rules deciding which paths the tree walk skips.
//!
//! Matching is deliberately simple: folder prefixes are compared
//! component-wise against the relative directory, file paths are exact,
//! and extensions are plain name suffixes. No globbing.

use crate::config::CheckConfig;
use std::path::{Path, PathBuf};

/// The three ignore collections applied during a tree walk.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    /// File name suffixes to skip (e.g. `.o`, `.ini.in`).
    pub extensions: Vec<String>,
    /// Folder prefixes to prune, relative to the scan root.
    pub folders: Vec<PathBuf>,
    /// Exact relative file paths to skip.
    pub files: Vec<PathBuf>,
}

impl IgnoreRules {
    /// Build the rule set from the check configuration.
    pub fn from_config(config: &CheckConfig) -> Self {
        Self {
            extensions: config.ignored_extensions.clone(),
            folders: config.ignored_folders.iter().map(PathBuf::from).collect(),
            files: config.ignored_files.iter().map(PathBuf::from).collect(),
        }
    }

    /// Return a copy with additional ignored file paths appended.
    ///
    /// The license check skips README/License files the copyright check
    /// still inspects.
    pub fn with_extra_files<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.files
            .extend(extra.into_iter().map(|s| PathBuf::from(s.as_ref())));
        self
    }

    /// Whether a directory (relative to the scan root) must be pruned.
    pub fn is_ignored_dir(&self, rel_dir: &Path) -> bool {
        self.folders.iter().any(|prefix| rel_dir.starts_with(prefix))
    }

    /// Whether a file (relative to the scan root) must be skipped.
    ///
    /// Rules apply in order: exact relative path, then extension suffix.
    pub fn is_ignored_file(&self, rel_path: &Path) -> bool {
        if self.files.iter().any(|f| f == rel_path) {
            return true;
        }

        let name = rel_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }
}
