//! CLI utility functions

use miette::{IntoDiagnostic, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use eslint_bridge_core::BridgeSettings;

use crate::cli::SettingsArgs;

const DEFAULT_ESLINT: &str = "eslint";
const DEFAULT_SHELL: &str = "/bin/sh";

pub fn create_tokio_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()
}

/// Builds settings from the `--settings` file, then applies explicit flags.
pub fn load_settings(args: &SettingsArgs) -> Result<BridgeSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            BridgeSettings::from_file(path).into_diagnostic()?
        }
        None => BridgeSettings::new(DEFAULT_ESLINT, DEFAULT_SHELL),
    };

    if let Some(path) = &args.eslint_path {
        settings.eslint_path = path.clone();
    }
    if let Some(path) = &args.shell_path {
        settings.shell_path = path.clone();
    }
    if !args.config_names.is_empty() {
        settings.config_names = args.config_names.clone();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        if timeout_ms == 0 {
            return Err(miette::miette!("--timeout-ms must be greater than zero"));
        }
        settings.timeout_ms = timeout_ms;
    }
    if let Some(max_depth) = args.max_depth {
        settings.max_depth = max_depth;
    }

    Ok(settings)
}
