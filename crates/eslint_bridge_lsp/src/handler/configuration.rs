//! Configuration change handler.

use tower_lsp::lsp_types::*;
use tracing::{debug, error};

use crate::config::apply_settings;
use crate::state::BackendState;

/// Handles the `workspace/didChangeConfiguration` notification.
///
/// Returns an error message for the client when the new settings are unusable.
pub async fn handle_did_change_configuration(
    state: &BackendState,
    params: DidChangeConfigurationParams,
) -> Option<String> {
    debug!("Configuration changed: {:?}", params.settings);

    match apply_settings(state, params.settings) {
        Ok(()) => None,
        Err(e) => {
            error!("Ignoring ESLint settings: {}", e);
            Some(format!("ESLint disabled: {}", e))
        }
    }
}
