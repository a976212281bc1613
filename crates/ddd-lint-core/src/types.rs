//! Violation and result types.

use serde::Serialize;
use std::path::PathBuf;

use crate::extractor::ImportRef;
use crate::layer::Layer;

/// A file importing at least one layer it must not depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileViolation {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Layer the file belongs to.
    pub layer: Layer,
    /// Layer of the first taboo import.
    pub forbidden: Layer,
    /// All taboo imports, in line order.
    pub imports: Vec<ImportRef>,
}

/// Result of checking a source tree.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LintResult {
    /// Violating files, in visitation order.
    pub violations: Vec<FileViolation>,
    /// Number of files read.
    pub files_scanned: usize,
    /// Number of files that belong to a layer.
    pub files_classified: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no file breaks the layering.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Total number of taboo imports across all files.
    #[must_use]
    pub fn import_count(&self) -> usize {
        self.violations.iter().map(|v| v.imports.len()).sum()
    }

    /// Adds results from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_scanned += other.files_scanned;
        self.files_classified += other.files_classified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(path: &str, lines: &[usize]) -> FileViolation {
        FileViolation {
            path: PathBuf::from(path),
            layer: Layer::Domain,
            forbidden: Layer::App,
            imports: lines
                .iter()
                .map(|&line| ImportRef {
                    layer: Layer::App,
                    line,
                    text: "use Acme\\Shop\\App\\Mailer;".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_result_is_valid() {
        assert!(LintResult::new().is_valid());
    }

    #[test]
    fn any_violation_invalidates() {
        let mut result = LintResult::new();
        result.violations.push(make_violation("Order.php", &[3]));
        assert!(!result.is_valid());
    }

    #[test]
    fn counts_imports_across_files() {
        let mut result = LintResult::new();
        result.violations.push(make_violation("Order.php", &[3, 4]));
        result.violations.push(make_violation("Invoice.php", &[7]));
        assert_eq!(result.import_count(), 3);
    }

    #[test]
    fn extend_keeps_order_and_sums_counters() {
        let mut a = LintResult::new();
        a.files_scanned = 2;
        a.violations.push(make_violation("A.php", &[1]));

        let mut b = LintResult::new();
        b.files_scanned = 3;
        b.files_classified = 1;
        b.violations.push(make_violation("B.php", &[1]));

        a.extend(b);
        assert_eq!(a.files_scanned, 5);
        assert_eq!(a.files_classified, 1);
        assert_eq!(a.violations[1].path, PathBuf::from("B.php"));
    }
}
