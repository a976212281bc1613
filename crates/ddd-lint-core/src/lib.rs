//! # ddd-lint-core
//!
//! Core engine for enforcing Domain-Driven Design layer isolation on PHP
//! source trees.
//!
//! Files are classified into a [`Layer`] by their `namespace` declaration,
//! their `use` statements are resolved to layers the same way, and every
//! import that hits the fixed [`TABOOS`] table is reported. Matching is
//! line-level: there is no parser and no symbol resolution.
//!
//! - [`ProjectDescriptor`] reads the root namespace from `composer.json`
//! - [`walk_sources`] enumerates source files deterministically
//! - [`classify`] and [`scan_imports`] extract the layer information
//! - [`check`] applies the taboo table to one file
//! - [`Analyzer`] folds the whole tree into a [`LintResult`]
//!
//! ## Example
//!
//! ```ignore
//! use ddd_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder().project_root(".").build()?;
//! let result = analyzer.analyze();
//! assert!(result.is_valid());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod descriptor;
mod engine;
mod extractor;
mod layer;
mod taboo;
mod types;
mod walker;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerSettings, Settings, SettingsError};
pub use descriptor::{DescriptorError, ProjectDescriptor, RootPrefix};
pub use engine::check;
pub use extractor::{classify, extract, scan_imports, FileAnalysis, ImportRef};
pub use layer::{Layer, LAYER_PRECEDENCE};
pub use taboo::{is_taboo, taboos, TABOOS};
pub use types::{FileViolation, LintResult};
pub use walker::walk_sources;
