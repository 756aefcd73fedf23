use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a git repository with one committed README.txt.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"], None);
    // Deterministic default branch name across environments
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"], None);
    git(path, &["config", "user.email", "test@example.com"], None);
    git(path, &["config", "user.name", "Test User"], None);

    std::fs::write(path.join("README.txt"), "MySQL Router 1.0\n").unwrap();
    git(path, &["add", "."], None);
    git(path, &["commit", "-m", "Initial commit"], None);

    temp_dir
}

/// Write a file (creating parent directories) and commit it at a fixed date.
///
/// `date` is an ISO-8601 local timestamp, e.g. `2019-03-04T12:00:00`; it sets
/// both the author and the committer date so `git log --format=%ci` reports it.
pub(crate) fn commit_file(repo: &Path, rel: &str, content: &str, date: &str) {
    write_file(repo, rel, content);
    git(repo, &["add", rel], None);
    git(
        repo,
        &["commit", "-m", &format!("Add {}", rel)],
        Some(date),
    );
}

/// Write a file and stage it without committing (a "tracked, uncommitted" file).
pub(crate) fn stage_file(repo: &Path, rel: &str, content: &str) {
    write_file(repo, rel, content);
    git(repo, &["add", rel], None);
}

fn write_file(repo: &Path, rel: &str, content: &str) {
    let path = repo.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// A conforming file header: copyright line for `year`, blank separator,
/// and the full short license block, all behind `#` comment markers.
pub(crate) fn valid_header(year: i32) -> String {
    let block = [
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
    ];

    let mut header = format!(
        "# Copyright (c) {}, Oracle and/or its affiliates. All rights reserved.\n#\n",
        year
    );
    for line in block {
        if line.is_empty() {
            header.push_str("#\n");
        } else {
            header.push_str(&format!("# {}\n", line));
        }
    }
    header
}

fn git(repo_dir: &Path, args: &[&str], date: Option<&str>) {
    let mut cmd = Command::new("git");
    cmd.current_dir(repo_dir).args(args);
    if let Some(date) = date {
        cmd.env("GIT_AUTHOR_DATE", date);
        cmd.env("GIT_COMMITTER_DATE", date);
    }

    let output = cmd
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
