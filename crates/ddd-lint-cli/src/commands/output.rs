//! Output formatting for check results.

use anyhow::Result;
use ddd_lint_core::LintResult;
use serde::Serialize;
use std::fmt::Write;

use crate::OutputFormat;

/// Line printed when no file breaks the layering.
pub const SUCCESS_MESSAGE: &str =
    "Success! \tNo \"use\"-statements inappropriate in the context of DDD could be found.";

/// Print check results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    print!("{}", render(result, format)?);
    Ok(())
}

/// Render check results in the specified format.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result)?,
        OutputFormat::Compact => render_compact(result),
    })
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for v in &result.violations {
        let _ = writeln!(out);
        let _ = writeln!(out, "This file in {} uses {} classes:", v.layer, v.forbidden);
        let _ = writeln!(out, "{}", v.path.display());
        for import in &v.imports {
            let _ = writeln!(out, "{}", import.text);
        }
    }

    if result.is_valid() {
        let _ = writeln!(out, "{SUCCESS_MESSAGE}");
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    #[serde(flatten)]
    result: &'a LintResult,
}

fn render_json(result: &LintResult) -> Result<String> {
    let report = JsonReport {
        valid: result.is_valid(),
        result,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for v in &result.violations {
        for import in &v.imports {
            let _ = writeln!(
                out,
                "{}:{}: {} -> {}: {}",
                v.path.display(),
                import.line,
                v.layer,
                import.layer,
                import.text.trim(),
            );
        }
    }
    out
}
