//! core::paths
//!
//! Centralized path routing for noto storage locations.
//!
//! # Storage Layout
//!
//! - `~/.noto/storage.json` - the persisted configuration document
//! - `<repo-or-cwd>/.noto/commit-prompt.md` - optional commit-style
//!   guideline file, discovered by walking upward from the working
//!   directory toward the repository root
//!
//! No code outside this module should compute `.noto` paths directly.

use std::path::{Path, PathBuf};

/// Directory name for noto data, both per-user and per-repository.
pub const NOTO_DIR: &str = ".noto";

/// File name of the persisted configuration document.
pub const STORAGE_FILE: &str = "storage.json";

/// Relative path of the commit-style guideline file within a directory.
pub const PROMPT_FILE: &str = "commit-prompt.md";

/// Location of the per-user configuration document.
///
/// Returns `None` when no home directory can be resolved; callers treat
/// that the same as a missing document.
pub fn storage_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(NOTO_DIR).join(STORAGE_FILE))
}

/// The guideline file path inside `dir`.
pub fn prompt_file_in(dir: &Path) -> PathBuf {
    dir.join(NOTO_DIR).join(PROMPT_FILE)
}

/// Find the nearest guideline file, walking upward from `cwd`.
///
/// The search stops at `stop_at` (inclusive) when given, otherwise at the
/// filesystem root. The first match wins, so a guideline file in a
/// subdirectory shadows one at the repository root. Absence is not an
/// error; the built-in default guidelines are used instead.
pub fn find_prompt_file(cwd: &Path, stop_at: Option<&Path>) -> Option<PathBuf> {
    let mut dir = cwd.to_path_buf();
    loop {
        let candidate = prompt_file_in(&dir);
        if candidate.is_file() {
            return Some(candidate);
        }
        if stop_at.is_some_and(|stop| dir == stop) {
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}
