//! Lint orchestration: config discovery, invocation and parsing.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::fix::fixed_content;
use crate::invocation::{LintInvocation, LintMode};
use crate::locator::{ConfigSearchSpec, absolutize};
use crate::process::execute;
use crate::report::LintReport;
use crate::{BridgeSettings, LintDiagnostic, LinterError};

/// Result of a lint request.
///
/// Separates "nothing to lint" from "ESLint failed" so callers can tell an
/// empty result from a broken tool.
#[derive(Debug)]
pub enum Outcome<T> {
    /// ESLint ran and its output was understood.
    Success(T),
    /// No config file governs the document.
    Empty,
    /// Spawning, running or parsing failed.
    Failed(LinterError),
}

impl<T> Outcome<T> {
    /// Converts into the value, handing any failure to `on_error`.
    pub fn report(self, on_error: impl FnOnce(&LinterError)) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Empty => None,
            Outcome::Failed(e) => {
                on_error(&e);
                None
            }
        }
    }

    /// Converts into the value, logging failures.
    pub fn ok(self) -> Option<T> {
        self.report(|e| error!("{}", e))
    }

    /// Maps the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Returns true for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl<T> From<Result<T, LinterError>> for Outcome<T> {
    fn from(result: Result<T, LinterError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Runs ESLint for single documents under one settings snapshot.
#[derive(Debug, Clone)]
pub struct Linter {
    settings: BridgeSettings,
    search: ConfigSearchSpec,
}

impl Linter {
    /// Creates a linter for the given settings.
    pub fn new(settings: BridgeSettings) -> Self {
        let search = settings.search_spec();
        Self { settings, search }
    }

    /// Returns the settings this linter was built with.
    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Finds the config file governing `file_path`, searching from its
    /// directory upward.
    pub fn locate_config(&self, file_path: &Path) -> Option<PathBuf> {
        let file_path = absolutize(file_path);
        let start_dir = file_path.parent()?;
        self.search.locate(start_dir)
    }

    /// Runs ESLint against `file_path` using `config_path`.
    ///
    /// When `stdin` is given, ESLint lints that text as if it were the file.
    pub async fn run(
        &self,
        config_path: &Path,
        file_path: &Path,
        mode: LintMode,
        stdin: Option<String>,
    ) -> Outcome<LintReport> {
        let invocation =
            match LintInvocation::new(&self.settings, config_path, file_path, mode, stdin) {
                Ok(inv) => inv,
                Err(e) => return Outcome::Failed(e),
            };
        let command = invocation.to_string();

        let result = async {
            let output = execute(&invocation, self.settings.timeout()).await?;
            let stdout = output.into_stdout(&command)?;
            LintReport::parse(&stdout)
        }
        .await;

        Outcome::from(result)
    }

    /// Locates the config for `file_path` and runs ESLint.
    pub async fn lint(
        &self,
        file_path: &Path,
        mode: LintMode,
        stdin: Option<String>,
    ) -> Outcome<LintReport> {
        let file_path = absolutize(file_path);
        let Some(config_path) = self.locate_config(&file_path) else {
            debug!("No ESLint config found for {}", file_path.display());
            return Outcome::Empty;
        };
        debug!(
            "Linting {} with {}",
            file_path.display(),
            config_path.display()
        );

        self.run(&config_path, &file_path, mode, stdin).await
    }

    /// Returns diagnostics for `file_path`, linting `text` when given.
    pub async fn diagnose(
        &self,
        file_path: &Path,
        text: Option<&str>,
    ) -> Outcome<Vec<LintDiagnostic>> {
        self.lint(file_path, LintMode::Diagnose, text.map(str::to_string))
            .await
            .map(|report| report.diagnostics)
    }

    /// Returns the fixed body for `current`, or `None` when ESLint proposes
    /// no change.
    pub async fn fix(&self, file_path: &Path, current: &str) -> Outcome<Option<String>> {
        self.lint(file_path, LintMode::FixDryRun, Some(current.to_string()))
            .await
            .map(|report| fixed_content(report.fix.as_ref(), current).map(str::to_string))
    }
}
