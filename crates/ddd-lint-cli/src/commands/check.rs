//! Check command implementation.

use anyhow::{Context, Result};
use ddd_lint_core::{Analyzer, LintResult, Settings};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command. Returns whether the layering holds.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    settings: Option<&Path>,
) -> Result<bool> {
    let result = analyze(path, exclude, settings)?;
    super::output::print(&result, format)?;
    Ok(result.is_valid())
}

/// Loads settings, builds the analyzer and walks the tree.
///
/// Any error here is fatal: nothing has been reported yet.
fn analyze(path: &Path, exclude: Vec<String>, settings: Option<&Path>) -> Result<LintResult> {
    let settings = load_settings(settings)?;

    let analyzer = Analyzer::builder()
        .project_root(path)
        .settings(settings)
        .excludes(exclude)
        .build()
        .with_context(|| format!("Failed to prepare analysis of {}", path.display()))?;

    tracing::info!(
        "Checking {} under namespace {}",
        analyzer.source_root().display(),
        analyzer.prefix()
    );

    Ok(analyzer.analyze())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    tracing::debug!("Loading settings from {}", path.display());
    Settings::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddd_lint_core::Layer;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "composer.json",
            r#"{"autoload": {"psr-4": {"Acme\\Shop\\": "src/"}}}"#,
        );
        write(
            tmp.path(),
            "src/Domain/Order.php",
            "<?php\nnamespace Acme\\Shop\\Domain;\nuse Acme\\Shop\\App\\Mailer;\n",
        );
        write(
            tmp.path(),
            "src/App/Handler.php",
            "<?php\nnamespace Acme\\Shop\\App;\nuse Acme\\Shop\\Domain\\Order;\n",
        );
        tmp
    }

    #[test]
    fn default_source_finds_violation() {
        let tmp = project();
        let result = analyze(tmp.path(), vec![], None).unwrap();
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].layer, Layer::Domain);
    }

    #[test]
    fn cli_excludes_are_applied() {
        let tmp = project();
        let result = analyze(
            tmp.path(),
            vec!["Domain/**".into()],
            None,
        )
        .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn project_settings_are_honoured() {
        let tmp = project();
        write(
            tmp.path(),
            "ddd-lint.toml",
            "[analyzer]\nexclude = [\"Domain/**\"]\n",
        );
        let settings = tmp.path().join("ddd-lint.toml");
        let result = analyze(tmp.path(), vec![], Some(&settings)).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn missing_explicit_settings_is_fatal() {
        let tmp = project();
        let settings = Path::new("/nonexistent/ddd-lint.toml");
        let err = analyze(tmp.path(), vec![], Some(settings)).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }

    #[test]
    fn missing_descriptor_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        let err = analyze(tmp.path(), vec![], None).unwrap_err();
        assert!(format!("{err:?}").contains("composer.json"));
    }
}
