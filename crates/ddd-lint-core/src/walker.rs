//! Source file discovery.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lazily yields every file under `root` with the given extension.
///
/// Entries are visited in file-name order, so repeated runs over an unchanged
/// tree see the same sequence. Unreadable entries are skipped. `exclude`
/// patterns are matched against the path relative to `root`.
pub fn walk_sources<'a>(
    root: &Path,
    extension: &'a str,
    exclude: &'a [glob::Pattern],
) -> impl Iterator<Item = PathBuf> + 'a {
    let base = root.to_path_buf();

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.is_file())
        .filter(move |path| path.extension().is_some_and(|ext| ext == extension))
        .filter(move |path| {
            let rel = path.strip_prefix(&base).unwrap_or(path);
            let excluded = exclude.iter().any(|p| p.matches_path(rel));
            if excluded {
                debug!("Excluding: {}", path.display());
            }
            !excluded
        })
}
