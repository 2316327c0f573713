//! Watched files handler.

use tower_lsp::lsp_types::*;
use tracing::{debug, info};

use crate::config::is_config_file;
use crate::state::BackendState;

/// Handles the `workspace/didChangeWatchedFiles` notification.
///
/// Returns true if an ESLint config file changed and open documents need
/// relinting.
pub async fn handle_did_change_watched_files(
    state: &BackendState,
    params: DidChangeWatchedFilesParams,
) -> bool {
    debug!("Watched files changed: {:?}", params.changes);

    let config_changed = params
        .changes
        .iter()
        .any(|change| is_config_file(state, change.uri.path()));

    if config_changed {
        info!("ESLint configuration changed, relinting open documents...");
    }
    config_changed
}
