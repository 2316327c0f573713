//! Construction of the ESLint command line.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::BridgeSettings;
use crate::LinterError;

/// Script passed to `<shell> -c`: replaces the shell with `$0`, passing the
/// remaining arguments exactly as given. Killing the child then kills ESLint.
const EXEC_SCRIPT: &str = r#"exec "$0" "$@""#;

/// What ESLint is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintMode {
    /// Report diagnostics only.
    Diagnose,
    /// Compute fixes without writing them (`--fix-dry-run`).
    FixDryRun,
}

/// A fully resolved ESLint command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintInvocation {
    /// ESLint executable.
    pub executable: PathBuf,
    /// Shell that launches the executable.
    pub shell: PathBuf,
    /// Directory containing the config file.
    pub working_dir: PathBuf,
    /// Arguments passed to ESLint.
    pub args: Vec<OsString>,
    /// Unsaved buffer text piped to ESLint instead of reading the file.
    pub stdin: Option<String>,
}

impl LintInvocation {
    /// Builds the invocation for `file_path` governed by `config_path`.
    ///
    /// The target path is always the final argument.
    pub fn new(
        settings: &BridgeSettings,
        config_path: &Path,
        file_path: &Path,
        mode: LintMode,
        stdin: Option<String>,
    ) -> Result<Self, LinterError> {
        let working_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                LinterError::config(format!(
                    "Config path has no parent directory: {}",
                    config_path.display()
                ))
            })?
            .to_path_buf();

        let mut args: Vec<OsString> = vec![
            "--config".into(),
            config_path.as_os_str().to_owned(),
            "--format".into(),
            "json".into(),
        ];
        if mode == LintMode::FixDryRun {
            args.push("--fix-dry-run".into());
        }
        if stdin.is_some() {
            args.push("--stdin".into());
            args.push("--stdin-filename".into());
        }
        args.push(file_path.as_os_str().to_owned());

        Ok(Self {
            executable: settings.eslint_path.clone(),
            shell: settings.shell_path.clone(),
            working_dir,
            args,
            stdin,
        })
    }

    /// Full argument vector handed to the shell.
    pub fn shell_args(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 3);
        argv.push(OsString::from("-c"));
        argv.push(OsString::from(EXEC_SCRIPT));
        argv.push(self.executable.as_os_str().to_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl fmt::Display for LintInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
