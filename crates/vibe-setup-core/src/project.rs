//! Project directory creation.
//!
//! ## Directory layout
//!
//! ```text
//! <sanitized_name>/
//! ├── memory-bank/          # Five seeded planning documents
//! └── .cursor/
//!     ├── rules/            # Per-concern .mdc rules (directory format)
//!     └── cursor-rules.md   # Consolidated rules (single-file format)
//! ```
//!
//! The root must not exist beforehand. Everything below it is created
//! idempotently.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SetupError};

pub const MEMORY_BANK_DIR: &str = "memory-bank";
pub const CURSOR_DIR: &str = ".cursor";
pub const RULES_DIR: &str = "rules";

/// Create `base/name`, refusing to touch anything that is already there.
///
/// Any existing entry counts (file, directory, or symlink). Nothing is
/// created when the check fails.
pub fn create_root(base: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(SetupError::InvalidName(name.to_string()));
    }

    let project_dir = base.join(name);
    if std::fs::symlink_metadata(&project_dir).is_ok() {
        return Err(SetupError::ProjectExists {
            name: name.to_string(),
            path: project_dir,
        });
    }

    std::fs::create_dir(&project_dir)?;
    info!(path = %project_dir.display(), "created project directory");
    Ok(project_dir)
}

/// Create `memory-bank/` and `.cursor/` under the project root.
///
/// Directories that already exist are accepted. Returns
/// `(memory_bank, cursor)`.
pub fn create_subdirectories(project_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let memory_bank = project_dir.join(MEMORY_BANK_DIR);
    let cursor = project_dir.join(CURSOR_DIR);

    ensure_dir(&memory_bank)?;
    ensure_dir(&cursor)?;

    Ok((memory_bank, cursor))
}

/// Create a directory (and parents) if it is not already there.
///
/// Returns whether anything was created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        debug!(path = %path.display(), "subdirectory already exists");
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    info!(path = %path.display(), "created subdirectory");
    Ok(true)
}
