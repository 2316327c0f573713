//! Parsing of ESLint's `--format json` output.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::LinterError;
use crate::diagnostic::{LintDiagnostic, map_messages};
use crate::fix::FixResult;

/// One entry of ESLint's JSON output array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileResult {
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    messages: Vec<Value>,
    #[serde(default)]
    output: Option<String>,
}

/// Diagnostics and proposed fix from a single ESLint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Normalized diagnostics.
    pub diagnostics: Vec<LintDiagnostic>,
    /// Full corrected body, present only when `--fix-dry-run` changed something.
    pub fix: Option<FixResult>,
}

impl LintReport {
    /// Parses ESLint's stdout.
    ///
    /// Exactly one file is linted per run, so only the first result is used.
    pub fn parse(stdout: &str) -> Result<Self, LinterError> {
        let results: Vec<FileResult> = serde_json::from_str(stdout)
            .map_err(|e| LinterError::parse(format!("Invalid ESLint output: {}", e)))?;

        let mut results = results.into_iter();
        let Some(first) = results.next() else {
            return Ok(Self::default());
        };

        let extra = results.len();
        if extra > 0 {
            warn!(
                "ESLint returned {} extra file results, using {}",
                extra,
                first.file_path.as_deref().unwrap_or("<unknown>")
            );
        }

        Ok(Self {
            diagnostics: map_messages(&first.messages),
            fix: first.output.map(FixResult::new),
        })
    }

    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::Severity::Error)
    }
}
