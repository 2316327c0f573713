//! Code action handler for auto-fix support.

use std::collections::HashMap;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::debug;

use crate::handler::save::compute_fix_edit;
use crate::state::SharedState;

/// Kind of the whole-document fix action.
pub const FIX_ALL_KIND: &str = "source.fixAll.eslint";

/// Handles the `textDocument/codeAction` request.
pub async fn handle_code_action(
    state: &SharedState,
    params: CodeActionParams,
) -> Result<Option<CodeActionResponse>> {
    debug!("Code action request: {}", params.text_document.uri);

    let wants_fix_all = match &params.context.only {
        Some(only) => only.iter().any(|kind| includes_fix_all(kind)),
        None => true,
    };
    if !wants_fix_all {
        return Ok(None);
    }

    let uri = &params.text_document.uri;
    let Some(edit) = compute_fix_edit(state, uri).await else {
        return Ok(Some(Vec::new()));
    };

    let action = CodeAction {
        title: "Fix all ESLint auto-fixable problems".to_string(),
        kind: Some(CodeActionKind::new(FIX_ALL_KIND)),
        edit: Some(WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), vec![edit])])),
            ..Default::default()
        }),
        ..Default::default()
    };

    Ok(Some(vec![CodeActionOrCommand::CodeAction(action)]))
}

/// Code action kinds are hierarchical: `source.fixAll` selects
/// `source.fixAll.eslint`.
fn includes_fix_all(requested: &CodeActionKind) -> bool {
    let requested = requested.as_str();
    FIX_ALL_KIND == requested
        || FIX_ALL_KIND
            .strip_prefix(requested)
            .is_some_and(|rest| rest.starts_with('.'))
}
