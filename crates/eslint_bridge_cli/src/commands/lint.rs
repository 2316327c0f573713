//! Lint command implementation

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::{error, info, warn};

use eslint_bridge_core::{BridgeSettings, LintMode, Linter, Outcome, fixed_content};

use crate::cli::OutputFormat;
use crate::output::{FileReport, output_results};
use crate::utils::create_tokio_runtime;

pub fn run_lint(
    settings: BridgeSettings,
    files: &[impl AsRef<Path>],
    format: OutputFormat,
    fix: bool,
) -> Result<bool> {
    let linter = Linter::new(settings);
    let runtime = create_tokio_runtime()?;

    let mut results = Vec::with_capacity(files.len());
    let mut failed = 0usize;
    for file in files {
        let file = file.as_ref();
        match runtime.block_on(lint_file(&linter, file, fix)) {
            Ok(Some(report)) => results.push(report),
            Ok(None) => {}
            Err(e) => {
                error!("{:?}", e);
                failed += 1;
            }
        }
    }

    let has_errors = output_results(&results, format)?;
    if failed > 0 {
        return Err(miette::miette!("ESLint failed on {} file(s)", failed));
    }
    Ok(has_errors)
}

async fn lint_file(linter: &Linter, path: &Path, fix: bool) -> Result<Option<FileReport>> {
    let content = fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
    let mode = if fix {
        LintMode::FixDryRun
    } else {
        LintMode::Diagnose
    };

    let report = match linter.lint(path, mode, Some(content.clone())).await {
        Outcome::Success(report) => report,
        Outcome::Empty => {
            warn!("No ESLint config found for {}, skipping", path.display());
            return Ok(None);
        }
        Outcome::Failed(e) => {
            return Err(miette::miette!("{}: {}", path.display(), e));
        }
    };

    let mut fixed = false;
    if fix && let Some(body) = fixed_content(report.fix.as_ref(), &content) {
        fs::write(path, body).into_diagnostic()?;
        info!("Applied ESLint fixes to {}", path.display());
        fixed = true;
    }

    Ok(Some(FileReport {
        path: path.to_path_buf(),
        diagnostics: report.diagnostics,
        fixed,
    }))
}
