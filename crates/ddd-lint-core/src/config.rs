//! Optional TOML settings (`ddd-lint.toml`).
//!
//! Every field has a default reproducing the fixed layout of a Composer
//! project: `composer.json` at the root, sources under `src/`, `.php` files.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::descriptor::DEFAULT_ROOT_SEGMENTS;

/// Top-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Analyzer section.
    #[serde(default)]
    pub analyzer: AnalyzerSettings,
}

/// `[analyzer]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerSettings {
    /// Project descriptor, relative to the project root.
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    /// Directory to inspect, relative to the project root.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Source file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Leading namespace segments that form the project root.
    #[serde(default = "default_root_segments")]
    pub root_segments: usize,

    /// Glob patterns to exclude, relative to `source_dir`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            source_dir: default_source_dir(),
            extension: default_extension(),
            root_segments: default_root_segments(),
            exclude: Vec::new(),
        }
    }
}

fn default_descriptor() -> PathBuf {
    PathBuf::from("composer.json")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_extension() -> String {
    "php".to_owned()
}

fn default_root_segments() -> usize {
    DEFAULT_ROOT_SEGMENTS
}

/// Errors when loading settings.
#[derive(Debug, Error, Diagnostic)]
pub enum SettingsError {
    /// Failed to read settings file.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(ddd_lint::settings::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("invalid settings: {message}")]
    #[diagnostic(code(ddd_lint::settings::parse))]
    Parse {
        /// Parse error detail.
        message: String,
    },

    /// Settings are structurally invalid.
    #[error("settings validation: {0}")]
    #[diagnostic(code(ddd_lint::settings::validation))]
    Validation(String),
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid or fails validation.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content).map_err(|e| SettingsError::Parse {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates settings consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let a = &self.analyzer;

        if a.root_segments == 0 {
            return Err(SettingsError::Validation(
                "analyzer.root_segments must be at least 1".into(),
            ));
        }
        if a.extension.is_empty() || a.extension.starts_with('.') {
            return Err(SettingsError::Validation(format!(
                "analyzer.extension: expected a bare extension like \"php\", got {:?}",
                a.extension
            )));
        }
        for (i, pattern) in a.exclude.iter().enumerate() {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(SettingsError::Validation(format!(
                    "analyzer.exclude[{i}]: {e}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::parse("").expect("parse failed");
        let a = &settings.analyzer;
        assert_eq!(a.descriptor, PathBuf::from("composer.json"));
        assert_eq!(a.source_dir, PathBuf::from("src"));
        assert_eq!(a.extension, "php");
        assert_eq!(a.root_segments, 2);
        assert!(a.exclude.is_empty());
    }

    #[test]
    fn parse_full_settings() {
        let toml = r#"
[analyzer]
descriptor = "app/composer.json"
source_dir = "app/src"
extension = "inc"
root_segments = 3
exclude = ["**/Tests/**"]
"#;
        let settings = Settings::parse(toml).expect("parse failed");
        let a = &settings.analyzer;
        assert_eq!(a.descriptor, PathBuf::from("app/composer.json"));
        assert_eq!(a.source_dir, PathBuf::from("app/src"));
        assert_eq!(a.extension, "inc");
        assert_eq!(a.root_segments, 3);
        assert_eq!(a.exclude, vec!["**/Tests/**".to_string()]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"
[analyzer]
taboos = { Domain = [] }
"#;
        let err = Settings::parse(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn zero_root_segments_is_rejected() {
        let err = Settings::parse("[analyzer]\nroot_segments = 0\n").unwrap_err();
        assert!(err.to_string().contains("root_segments"));
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let err = Settings::parse("[analyzer]\nextension = \".php\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }

    #[test]
    fn bad_glob_is_rejected() {
        let err = Settings::parse("[analyzer]\nexclude = [\"[\"]\n").unwrap_err();
        assert!(err.to_string().contains("exclude[0]"));
    }
}
