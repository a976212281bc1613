//! Locating the optional `ddd-lint.toml` for a project.
//!
//! An explicit `--config` path wins. Otherwise the project root is searched
//! for [`SETTINGS_FILE_NAMES`] in order. Nothing outside the project is
//! consulted; with no file the built-in defaults apply.

use std::path::{Path, PathBuf};

/// Settings file names looked up in the project root, first match wins.
pub const SETTINGS_FILE_NAMES: &[&str] = &["ddd-lint.toml", ".ddd-lint.toml"];

/// Returns the settings file to load, or `None` to use defaults.
///
/// An explicit path is returned as given; loading reports it if missing.
#[must_use]
pub fn locate(project_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let found = SETTINGS_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(path) = &found {
        tracing::debug!("Found project settings: {}", path.display());
    }
    found
}
