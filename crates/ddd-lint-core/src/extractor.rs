//! Line-level extraction of namespace and `use` declarations.
//!
//! Only declarations beginning with the project's [`RootPrefix`] are
//! considered; third-party namespaces are invisible to the checker.

use serde::Serialize;
use std::path::PathBuf;

use crate::descriptor::RootPrefix;
use crate::layer::{Layer, LAYER_PRECEDENCE};

/// An import of one of the project's layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRef {
    /// Layer the imported name lives in.
    pub layer: Layer,
    /// Line number (1-indexed).
    pub line: usize,
    /// The source line, without its line terminator.
    pub text: String,
}

/// A classified source file and its layer imports.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    /// Path of the file as walked.
    pub path: PathBuf,
    /// Layer from the namespace declaration.
    pub layer: Layer,
    /// Every layer import, in line order.
    pub imports: Vec<ImportRef>,
}

/// Pieces of a line where a statement may begin: the line start, the text
/// after an opening `<?php` tag, and the text after each `;`.
fn statements(line: &str) -> impl Iterator<Item = &str> + '_ {
    line.split(';').map(|stmt| {
        let stmt = stmt.trim_start();
        stmt.strip_prefix("<?php").map_or(stmt, str::trim_start)
    })
}

/// Returns what follows `keyword`, if `stmt` is such a declaration.
fn declared_names<'a>(stmt: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = stmt.strip_prefix(keyword)?;
    let names = rest.trim_start();
    // keyword must be followed by whitespace: `user` is not `use`
    if names.len() == rest.len() {
        return None;
    }
    Some(names)
}

/// Part of a declared name after `prefix`, or `None` outside the project root.
fn project_suffix<'a>(name: &'a str, prefix: &RootPrefix) -> Option<&'a str> {
    let name = name.trim();
    name.strip_prefix('\\')
        .unwrap_or(name)
        .strip_prefix(prefix.as_str())
}

/// Layers imported by the `use` statements on one line, in precedence order.
///
/// Comma-separated names are resolved one by one.
fn imported_layers(line: &str, prefix: &RootPrefix) -> Vec<Layer> {
    let named: Vec<Layer> = statements(line)
        .filter_map(|stmt| declared_names(stmt, "use"))
        .flat_map(|names| names.split(','))
        .filter_map(|name| project_suffix(name, prefix).and_then(Layer::resolve))
        .collect();

    LAYER_PRECEDENCE
        .into_iter()
        .filter(|layer| named.contains(layer))
        .collect()
}

/// Determines a file's layer from its namespace declaration.
///
/// The first namespace declared under `prefix` decides, wherever it sits on
/// its line; later ones are ignored. Returns `None` when that namespace
/// names no layer, or when there is no such declaration at all.
#[must_use]
pub fn classify<'a, I>(lines: I, prefix: &RootPrefix) -> Option<Layer>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(statements)
        .find_map(|stmt| {
            declared_names(stmt, "namespace").and_then(|name| project_suffix(name, prefix))
        })
        .and_then(Layer::resolve)
}

/// Collects every `use` of a layer under `prefix`.
///
/// A line importing several layers yields one [`ImportRef`] per layer,
/// highest precedence first.
#[must_use]
pub fn scan_imports<'a, I>(lines: I, prefix: &RootPrefix) -> Vec<ImportRef>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(idx, line)| {
            imported_layers(line, prefix)
                .into_iter()
                .map(move |layer| ImportRef {
                    layer,
                    line: idx + 1,
                    text: line.to_owned(),
                })
        })
        .collect()
}

/// Classifies and scans one file's content.
///
/// Returns `None` for files outside every layer.
#[must_use]
pub fn extract(path: PathBuf, content: &str, prefix: &RootPrefix) -> Option<FileAnalysis> {
    let layer = classify(content.lines(), prefix)?;
    let imports = scan_imports(content.lines(), prefix);
    Some(FileAnalysis {
        path,
        layer,
        imports,
    })
}
