//! Taboo rule evaluation for a single file.

use crate::extractor::FileAnalysis;
use crate::taboo::is_taboo;
use crate::types::FileViolation;

/// Checks one classified file against the taboo table.
///
/// Returns `None` unless at least one import is taboo for the file's layer.
/// A line importing several taboo layers is kept once, under the first of
/// them.
#[must_use]
pub fn check(analysis: &FileAnalysis) -> Option<FileViolation> {
    let mut imports: Vec<_> = analysis
        .imports
        .iter()
        .filter(|imp| is_taboo(analysis.layer, imp.layer))
        .cloned()
        .collect();
    imports.dedup_by_key(|imp| imp.line);

    let forbidden = imports.first()?.layer;

    Some(FileViolation {
        path: analysis.path.clone(),
        layer: analysis.layer,
        forbidden,
        imports,
    })
}
