//! Pipeline orchestration: descriptor, walk, classify, scan, check.

use crate::config::Settings;
use crate::descriptor::{DescriptorError, ProjectDescriptor, RootPrefix};
use crate::engine::check;
use crate::extractor::extract;
use crate::types::{FileViolation, LintResult};
use crate::walker::walk_sources;

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that prevent an analysis from starting.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalyzerError {
    /// IO error resolving paths.
    #[error("IO error: {0}")]
    #[diagnostic(code(ddd_lint::io))]
    Io(#[from] std::io::Error),

    /// The project descriptor could not be used.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The source directory does not exist.
    #[error("source directory {path} not found")]
    #[diagnostic(
        code(ddd_lint::source_dir_missing),
        help("set analyzer.source_dir in ddd-lint.toml")
    )]
    SourceDirMissing {
        /// The directory that was looked for.
        path: PathBuf,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    #[diagnostic(code(ddd_lint::glob))]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    project_root: Option<PathBuf>,
    prefix: Option<RootPrefix>,
    exclude_patterns: Vec<String>,
    settings: Option<Settings>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root; descriptor and source directory are resolved
    /// against it.
    #[must_use]
    pub fn project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Uses `prefix` instead of reading the project descriptor.
    #[must_use]
    pub fn prefix(mut self, prefix: RootPrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the settings.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is unusable, the source directory
    /// doesn't exist, or an exclude pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let settings = self.settings.unwrap_or_default().analyzer;

        let root = self.project_root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let prefix = match self.prefix {
            Some(prefix) => prefix,
            None => {
                let descriptor = ProjectDescriptor::from_file(&root.join(&settings.descriptor))?;
                descriptor.root_prefix(settings.root_segments)?
            }
        };

        let source_dir = root.join(&settings.source_dir);
        let source_root = source_dir
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or(AnalyzerError::SourceDirMissing { path: source_dir })?;

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(settings.exclude);
        let exclude = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            source_root,
            prefix,
            extension: settings.extension,
            exclude,
        })
    }
}

/// Runs the layer check over a source tree.
///
/// Use [`Analyzer::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Analyzer {
    source_root: PathBuf,
    prefix: RootPrefix,
    extension: String,
    exclude: Vec<glob::Pattern>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the absolute source directory being analyzed.
    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Returns the project namespace root.
    #[must_use]
    pub fn prefix(&self) -> &RootPrefix {
        &self.prefix
    }

    /// Analyzes every source file and returns the violations in visitation
    /// order.
    ///
    /// Files that cannot be read are skipped; they never affect validity.
    #[must_use]
    pub fn analyze(&self) -> LintResult {
        info!(
            "Starting analysis at {} (root namespace {})",
            self.source_root.display(),
            self.prefix
        );

        let result = walk_sources(&self.source_root, &self.extension, &self.exclude).fold(
            LintResult::new(),
            |mut acc, path| {
                let bytes = match std::fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        debug!("Skipping unreadable {}: {e}", path.display());
                        return acc;
                    }
                };
                acc.files_scanned += 1;

                let content = String::from_utf8_lossy(&bytes);
                let Some(analysis) = extract(path, &content, &self.prefix) else {
                    return acc;
                };
                acc.files_classified += 1;
                debug!("{} is in {}", analysis.path.display(), analysis.layer);

                if let Some(violation) = check(&analysis) {
                    acc.violations.push(violation);
                }
                acc
            },
        );

        info!(
            "Analysis complete: {} violating file(s) among {} file(s)",
            result.violations.len(),
            result.files_scanned
        );

        result
    }

    /// Checks a single file's content without touching the filesystem.
    #[must_use]
    pub fn analyze_source(&self, path: impl Into<PathBuf>, content: &str) -> Option<FileViolation> {
        let analysis = extract(path.into(), content, &self.prefix)?;
        check(&analysis)
    }
}
