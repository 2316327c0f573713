//! Settings management for the LSP server.

use serde_json::Value;
use tracing::{error, info};

use eslint_bridge_core::{BridgeSettings, LinterError};

use crate::state::BackendState;

/// Replaces the stored settings with ones parsed from `value`.
///
/// Invalid settings clear the stored snapshot, so no document is linted until
/// the editor sends usable ones.
pub fn apply_settings(state: &BackendState, value: Value) -> Result<(), LinterError> {
    let parsed = BridgeSettings::from_value(value);

    let mut guard = match state.settings.write() {
        Ok(g) => g,
        Err(e) => {
            error!("Settings lock poisoned: {}", e);
            return Ok(());
        }
    };

    match parsed {
        Ok(settings) => {
            info!(
                "Using ESLint at {} (fix on save: {})",
                settings.eslint_path.display(),
                settings.fix_on_save
            );
            *guard = Some(settings);
            Ok(())
        }
        Err(e) => {
            *guard = None;
            Err(e)
        }
    }
}

/// Returns true if `path` names a file that may change lint results.
pub fn is_config_file(state: &BackendState, path: &str) -> bool {
    let names = match state.settings.read() {
        Ok(guard) => match guard.as_ref() {
            Some(settings) => settings.candidate_names(),
            None => return false,
        },
        Err(e) => {
            error!("Settings lock poisoned: {}", e);
            return false;
        }
    };

    let file_name = path.rsplit('/').next().unwrap_or(path);
    names.iter().any(|name| name == file_name)
}
