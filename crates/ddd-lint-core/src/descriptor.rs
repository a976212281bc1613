//! Project descriptor (`composer.json`) loading.
//!
//! The root namespace of the project is taken from the first key of
//! `autoload.psr-4`, in declaration order.

use miette::Diagnostic;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Namespace separator used by PHP.
const SEPARATOR: char = '\\';

/// Default number of leading namespace segments forming the root
/// (vendor and project).
pub const DEFAULT_ROOT_SEGMENTS: usize = 2;

/// Errors when loading the project descriptor. All of them are fatal.
#[derive(Debug, Error, Diagnostic)]
pub enum DescriptorError {
    /// Failed to read the descriptor file.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(ddd_lint::descriptor::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON.
    #[error("invalid project descriptor: {0}")]
    #[diagnostic(code(ddd_lint::descriptor::parse))]
    Parse(#[from] serde_json::Error),

    /// No `autoload.psr-4` mapping, or the mapping is empty.
    #[error("no autoload.psr-4 namespace mapping declared")]
    #[diagnostic(
        code(ddd_lint::descriptor::no_mapping),
        help("declare the project namespace under autoload.psr-4 in composer.json")
    )]
    NoMapping,

    /// The declared namespace is too short to derive a root from.
    #[error("namespace `{namespace}` has fewer than {required} segments")]
    #[diagnostic(code(ddd_lint::descriptor::short_namespace))]
    ShortNamespace {
        /// The offending psr-4 key.
        namespace: String,
        /// Segments needed.
        required: usize,
    },
}

/// Namespace root scoping all classified files, e.g. `Acme\Shop\`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPrefix {
    segments: Vec<String>,
    rendered: String,
}

impl RootPrefix {
    /// Builds a prefix from namespace segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let mut rendered = String::new();
        for segment in &segments {
            rendered.push_str(segment);
            rendered.push(SEPARATOR);
        }
        Self { segments, rendered }
    }

    /// Derives a prefix from the first `depth` segments of a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::ShortNamespace`] if the namespace has fewer
    /// than `depth` non-empty segments, or `depth` is zero.
    pub fn from_namespace(namespace: &str, depth: usize) -> Result<Self, DescriptorError> {
        let segments: Vec<&str> = namespace
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();

        if depth == 0 || segments.len() < depth {
            return Err(DescriptorError::ShortNamespace {
                namespace: namespace.to_owned(),
                required: depth.max(1),
            });
        }

        Ok(Self::from_segments(segments.into_iter().take(depth)))
    }

    /// The prefix as it appears in source, with a trailing separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// The individual namespace segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for RootPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// The parts of `composer.json` this tool reads.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    /// The first declared psr-4 namespace, verbatim.
    pub namespace: String,
}

impl ProjectDescriptor {
    /// Loads the descriptor from a file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses descriptor JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is invalid or declares no psr-4 mapping.
    pub fn parse(content: &str) -> Result<Self, DescriptorError> {
        #[derive(Deserialize)]
        struct RawDescriptor {
            #[serde(default)]
            autoload: Option<RawAutoload>,
        }

        #[derive(Deserialize)]
        struct RawAutoload {
            #[serde(rename = "psr-4", default)]
            psr4: Option<Map<String, Value>>,
        }

        let raw: RawDescriptor = serde_json::from_str(content)?;

        // Only the namespace key is read.
        let (namespace, _) = raw
            .autoload
            .and_then(|a| a.psr4)
            .and_then(|m| m.into_iter().next())
            .ok_or(DescriptorError::NoMapping)?;

        Ok(Self { namespace })
    }

    /// Derives the root prefix from the declared namespace.
    ///
    /// # Errors
    ///
    /// Returns error if the namespace has fewer than `depth` segments.
    pub fn root_prefix(&self, depth: usize) -> Result<RootPrefix, DescriptorError> {
        RootPrefix::from_namespace(&self.namespace, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_psr4_key() {
        let json = r#"{
            "name": "acme/shop",
            "autoload": {
                "psr-4": {
                    "Acme\\Shop\\": "src/",
                    "Acme\\Tools\\": "tools/"
                }
            }
        }"#;
        let d = ProjectDescriptor::parse(json).expect("parse failed");
        assert_eq!(d.namespace, "Acme\\Shop\\");
    }

    #[test]
    fn first_key_follows_declaration_order() {
        // "Zeta" sorts after "Alpha" but is declared first.
        let json = r#"{"autoload": {"psr-4": {"Zeta\\App\\": "src/", "Alpha\\Lib\\": "lib/"}}}"#;
        let d = ProjectDescriptor::parse(json).expect("parse failed");
        assert_eq!(d.namespace, "Zeta\\App\\");
    }

    #[test]
    fn accepts_directory_list() {
        let json = r#"{"autoload": {"psr-4": {"Acme\\Shop\\": ["src/", "lib/"]}}}"#;
        let d = ProjectDescriptor::parse(json).expect("parse failed");
        assert_eq!(d.namespace, "Acme\\Shop\\");
    }

    #[test]
    fn root_prefix_uses_two_segments() {
        let json = r#"{"autoload": {"psr-4": {"Acme\\Shop\\Core\\": "src/"}}}"#;
        let d = ProjectDescriptor::parse(json).expect("parse failed");
        let prefix = d.root_prefix(DEFAULT_ROOT_SEGMENTS).expect("prefix");
        assert_eq!(prefix.as_str(), "Acme\\Shop\\");
        assert_eq!(prefix.segments(), ["Acme", "Shop"]);
    }

    #[test]
    fn root_prefix_ignores_empty_segments() {
        let prefix = RootPrefix::from_namespace("\\Acme\\\\Shop\\", 2).expect("prefix");
        assert_eq!(prefix.to_string(), "Acme\\Shop\\");
    }

    #[test]
    fn short_namespace_is_rejected() {
        let err = RootPrefix::from_namespace("Acme\\", 2).unwrap_err();
        assert!(matches!(err, DescriptorError::ShortNamespace { required: 2, .. }));
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(RootPrefix::from_namespace("Acme\\Shop\\", 0).is_err());
    }

    #[test]
    fn empty_mapping_is_fatal() {
        let err = ProjectDescriptor::parse(r#"{"autoload": {"psr-4": {}}}"#).unwrap_err();
        assert!(matches!(err, DescriptorError::NoMapping));
    }

    #[test]
    fn missing_autoload_is_fatal() {
        let err = ProjectDescriptor::parse(r#"{"name": "acme/shop"}"#).unwrap_err();
        assert!(matches!(err, DescriptorError::NoMapping));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let err = ProjectDescriptor::parse("{ not json").unwrap_err();
        assert!(matches!(err, DescriptorError::Parse(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = ProjectDescriptor::from_file(Path::new("/nonexistent/composer.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/composer.json"));
    }
}
