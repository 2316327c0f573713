//! Output formatting module

mod json;
mod text;

use std::path::PathBuf;

use miette::Result;

use eslint_bridge_core::{LintDiagnostic, Severity};

use crate::cli::OutputFormat;

/// Lint result for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<LintDiagnostic>,
    /// True when `--fix` rewrote the file.
    pub fixed: bool,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

pub fn output_results(results: &[FileReport], format: OutputFormat) -> Result<bool> {
    let has_errors = results.iter().any(|r| r.has_errors());

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(has_errors)
}
