//! Fix-on-save handler.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::{debug, error};

use crate::conversion::whole_document_edit;
use crate::state::SharedState;

/// Handles the `textDocument/willSaveWaitUntil` request.
///
/// With fix-on-save enabled, returns one edit replacing the document with
/// ESLint's fixed output. The editor applies it before writing, so the fix is
/// part of the same save.
pub async fn handle_will_save_wait_until(
    state: &SharedState,
    params: WillSaveTextDocumentParams,
) -> Result<Option<Vec<TextEdit>>> {
    debug!(
        "Will save {} ({:?})",
        params.text_document.uri, params.reason
    );

    if !state.fix_on_save() {
        return Ok(None);
    }

    Ok(compute_fix_edit(state, &params.text_document.uri)
        .await
        .map(|edit| vec![edit]))
}

/// Runs ESLint in fix mode on the cached text of `uri`.
///
/// Returns `None` when nothing changes, when ESLint fails, or when the
/// document was edited while ESLint ran.
pub(crate) async fn compute_fix_edit(state: &SharedState, uri: &Url) -> Option<TextEdit> {
    let text = state.document_text(uri)?;
    let linter = state.linter()?;
    let path = uri.to_file_path().ok()?;

    let fixed = linter
        .fix(&path, &text)
        .await
        .report(|e| error!("ESLint fix failed for {}: {}", path.display(), e))??;

    if state.document_text(uri).as_deref() != Some(text.as_str()) {
        debug!("Discarding fix for {}: document changed", uri);
        return None;
    }

    Some(whole_document_edit(&text, fixed))
}
