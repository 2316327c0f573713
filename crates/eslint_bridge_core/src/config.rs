//! Bridge settings.
//!
//! Settings are an explicit value handed to each component. Editors send them
//! as `initializationOptions` or through `workspace/didChangeConfiguration`,
//! the CLI reads them from flags or a JSON(C) file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::LinterError;
use crate::locator::{ConfigSearchSpec, DEFAULT_CONFIG_NAMES, MAX_ASCENT_DEPTH};

/// Default subprocess timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Key under which editors usually nest these settings.
pub const SETTINGS_SECTION: &str = "eslint";

/// Settings controlling how ESLint is located and invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Path to the ESLint executable.
    #[serde(alias = "eslintPath")]
    pub eslint_path: PathBuf,

    /// Shell used to launch ESLint.
    #[serde(alias = "shellPath")]
    pub shell_path: PathBuf,

    /// Extra config file names, tried before the built-in defaults.
    #[serde(default, alias = "configNames")]
    pub config_names: Vec<String>,

    /// Apply `--fix-dry-run` output when a document is saved.
    #[serde(default, alias = "fixOnSave")]
    pub fix_on_save: bool,

    /// Subprocess timeout in milliseconds.
    #[serde(default = "default_timeout_ms", alias = "timeoutMs")]
    pub timeout_ms: u64,

    /// Maximum number of parent directories searched for a config file.
    #[serde(default = "default_max_depth", alias = "maxDepth")]
    pub max_depth: usize,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_max_depth() -> usize {
    MAX_ASCENT_DEPTH
}

impl BridgeSettings {
    /// Creates settings with default optional values.
    pub fn new(eslint_path: impl Into<PathBuf>, shell_path: impl Into<PathBuf>) -> Self {
        Self {
            eslint_path: eslint_path.into(),
            shell_path: shell_path.into(),
            config_names: Vec::new(),
            fix_on_save: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_depth: MAX_ASCENT_DEPTH,
        }
    }

    /// Loads settings from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read settings: {}", e)))?;

        let value = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .ok_or_else(|| LinterError::config("Settings file is empty"))?;

        Self::from_value(value)
    }

    /// Parses settings from a JSON value.
    ///
    /// Accepts the settings object itself or an object nesting it under
    /// [`SETTINGS_SECTION`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, LinterError> {
        let value = match value {
            serde_json::Value::Object(mut obj) if obj.contains_key(SETTINGS_SECTION) => obj
                .remove(SETTINGS_SECTION)
                .unwrap_or(serde_json::Value::Null),
            other => other,
        };

        let settings: Self = serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), LinterError> {
        if self.eslint_path.as_os_str().is_empty() {
            return Err(LinterError::config("eslint_path must not be empty"));
        }
        if self.shell_path.as_os_str().is_empty() {
            return Err(LinterError::config("shell_path must not be empty"));
        }
        if self.timeout_ms == 0 {
            return Err(LinterError::config("timeout_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the candidate config names: user names first, then defaults.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn candidate_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(
            self.config_names.len() + DEFAULT_CONFIG_NAMES.len(),
        );
        let all = self
            .config_names
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_CONFIG_NAMES.iter().copied());
        for name in all {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Builds the search spec for config discovery.
    pub fn search_spec(&self) -> ConfigSearchSpec {
        ConfigSearchSpec::new(self.candidate_names()).with_max_depth(self.max_depth)
    }

    /// Returns the subprocess timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
