//! Candidate-file discovery for tree-walking checks.
//!
//! Walks the source tree depth-first with sorted entries so runs are
//! deterministic, pruning ignored folders and skipping ignored, untracked,
//! and empty files.

use crate::error::{RelcheckError, Result};
use crate::git;
use crate::scan::IgnoreRules;
use std::path::{Path, PathBuf};

/// Collect the relative paths of all files a tree-walking check must inspect.
pub fn collect_candidates(root: &Path, rules: &IgnoreRules) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    walk_dir(root, Path::new(""), rules, &mut candidates)?;
    Ok(candidates)
}

fn walk_dir(
    root: &Path,
    rel_dir: &Path,
    rules: &IgnoreRules,
    candidates: &mut Vec<PathBuf>,
) -> Result<()> {
    let abs_dir = root.join(rel_dir);

    let mut entries: Vec<_> = std::fs::read_dir(&abs_dir)
        .map_err(|e| {
            RelcheckError::UserError(format!(
                "failed to read directory {}: {}",
                abs_dir.display(),
                e
            ))
        })?
        .collect::<std::io::Result<_>>()
        .map_err(|e| {
            RelcheckError::UserError(format!(
                "failed to read directory entry in {}: {}",
                abs_dir.display(),
                e
            ))
        })?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let rel_path = rel_dir.join(entry.file_name());
        let abs_path = entry.path();

        if abs_path.is_dir() {
            if !rules.is_ignored_dir(&rel_path) {
                walk_dir(root, &rel_path, rules, candidates)?;
            }
            continue;
        }

        if rules.is_ignored_file(&rel_path) {
            continue;
        }

        if !git::is_tracked(root, &abs_path)? {
            continue;
        }

        let size = std::fs::metadata(&abs_path)
            .map_err(|e| {
                RelcheckError::UserError(format!(
                    "failed to stat {}: {}",
                    abs_path.display(),
                    e
                ))
            })?
            .len();
        if size == 0 {
            continue;
        }

        candidates.push(rel_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo};

    fn rules() -> IgnoreRules {
        IgnoreRules {
            extensions: vec![".o".to_string()],
            folders: vec![PathBuf::from("build"), PathBuf::from(".git")],
            files: vec![PathBuf::from("License.txt")],
        }
    }

    #[test]
    fn collects_tracked_files_in_sorted_order() {
        let repo = create_test_repo();
        commit_file(repo.path(), "src/b.cc", "b\n", "2020-01-01T00:00:00");
        commit_file(repo.path(), "src/a.cc", "a\n", "2020-01-01T00:00:00");

        let found = collect_candidates(repo.path(), &rules()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["README.txt", "src/a.cc", "src/b.cc"]);
    }

    #[test]
    fn skips_untracked_files() {
        let repo = create_test_repo();
        std::fs::write(repo.path().join("scratch.cc"), "scratch\n").unwrap();

        let found = collect_candidates(repo.path(), &rules()).unwrap();
        assert!(!found.iter().any(|p| p.ends_with("scratch.cc")));
    }

    #[test]
    fn skips_empty_files() {
        let repo = create_test_repo();
        commit_file(repo.path(), "empty.cc", "", "2020-01-01T00:00:00");

        let found = collect_candidates(repo.path(), &rules()).unwrap();
        assert!(!found.iter().any(|p| p.ends_with("empty.cc")));
    }

    #[test]
    fn prunes_ignored_folders() {
        let repo = create_test_repo();
        commit_file(repo.path(), "build/gen.cc", "gen\n", "2020-01-01T00:00:00");

        let found = collect_candidates(repo.path(), &rules()).unwrap();
        assert!(!found.iter().any(|p| p.starts_with("build")));
    }

    #[test]
    fn skips_ignored_files_and_extensions() {
        let repo = create_test_repo();
        commit_file(repo.path(), "License.txt", "legal\n", "2020-01-01T00:00:00");
        commit_file(repo.path(), "obj.o", "bin\n", "2020-01-01T00:00:00");

        let found = collect_candidates(repo.path(), &rules()).unwrap();
        assert!(!found.iter().any(|p| p.ends_with("License.txt")));
        assert!(!found.iter().any(|p| p.ends_with("obj.o")));
    }
}
