//! Input location resolution for relcheck.
//!
//! Resolves the source root and the binary directory from, in priority
//! order: an explicit CLI argument, an environment variable, and the
//! current working directory. The source root must look like a real
//! release tree (it must contain the configured root marker file).

use crate::error::{RelcheckError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the source tree root.
pub const SOURCE_DIR_ENV: &str = "CMAKE_SOURCE_DIR";

/// Environment variable naming the build output directory.
pub const BINARY_DIR_ENV: &str = "CMAKE_BINARY_DIR";

/// Resolved input locations for a check run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Absolute path to the source tree root.
    pub source_root: PathBuf,

    /// Absolute path to the build output directory (console check only).
    pub binary_dir: PathBuf,
}

impl CheckContext {
    /// Resolve both locations and validate the source root.
    pub fn resolve(
        source_arg: Option<&Path>,
        bin_arg: Option<&Path>,
        root_marker: &str,
    ) -> Result<Self> {
        let source_root = resolve_dir(source_arg, SOURCE_DIR_ENV)?;
        let binary_dir = resolve_dir(bin_arg, BINARY_DIR_ENV)?;

        if !source_root.is_dir() || !source_root.join(root_marker).is_file() {
            return Err(RelcheckError::UserError(format!(
                "invalid source directory; was '{}' (expected a directory containing {})",
                source_root.display(),
                root_marker
            )));
        }

        Ok(Self {
            source_root,
            binary_dir,
        })
    }

    /// Path to the product binary: an explicit override, or
    /// `<binary_dir>/bin/<target>`.
    pub fn binary_path(&self, binary_override: Option<&Path>, target: &str) -> PathBuf {
        match binary_override {
            Some(path) => path.to_path_buf(),
            None => self.binary_dir.join("bin").join(target),
        }
    }
}

/// Apply the arg > env > cwd priority order and absolutize the result.
fn resolve_dir(arg: Option<&Path>, env_name: &str) -> Result<PathBuf> {
    let dir = match arg {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(env_name) {
            Some(value) => PathBuf::from(value),
            None => env::current_dir().map_err(|e| {
                RelcheckError::UserError(format!(
                    "failed to get current working directory: {}",
                    e
                ))
            })?,
        },
    };

    if dir.is_absolute() {
        Ok(dir)
    } else {
        let cwd = env::current_dir().map_err(|e| {
            RelcheckError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(cwd.join(dir))
    }
}
