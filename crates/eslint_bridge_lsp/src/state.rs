//! LSP Backend state management.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use tower_lsp::lsp_types::Url;
use tracing::error;

use eslint_bridge_core::{BridgeSettings, Linter, RequestSequencer};

/// Document content and version cache.
#[derive(Debug)]
pub(crate) struct DocumentData {
    pub text: String,
    pub version: i32,
}

/// Shared backend state.
pub(crate) struct BackendState {
    /// Document contents cache.
    pub documents: RwLock<HashMap<Url, DocumentData>>,
    /// Latest settings from the editor (None until valid settings arrive).
    pub settings: RwLock<Option<BridgeSettings>>,
    /// Orders overlapping lint requests per document.
    pub sequencer: RequestSequencer<Url>,
}

impl fmt::Debug for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendState")
            .field("documents", &"<HashMap<Url, DocumentData>>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl BackendState {
    /// Creates a new empty state.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            settings: RwLock::new(None),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Builds a linter from a snapshot of the current settings.
    ///
    /// Each request gets its own snapshot, so a settings change never affects
    /// a request already in flight.
    pub fn linter(&self) -> Option<Linter> {
        match self.settings.read() {
            Ok(guard) => guard.clone().map(Linter::new),
            Err(e) => {
                error!("Settings lock poisoned: {}", e);
                None
            }
        }
    }

    /// Returns whether fix-on-save is enabled.
    pub fn fix_on_save(&self) -> bool {
        self.settings
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.fix_on_save))
            .unwrap_or(false)
    }

    /// Returns a copy of a document's text.
    pub fn document_text(&self, uri: &Url) -> Option<String> {
        let docs = self.documents.read().ok()?;
        docs.get(uri).map(|d| d.text.clone())
    }

    /// Returns all open documents with their text and version.
    pub fn open_documents(&self) -> Vec<(Url, String, i32)> {
        match self.documents.read() {
            Ok(docs) => docs
                .iter()
                .map(|(uri, d)| (uri.clone(), d.text.clone(), d.version))
                .collect(),
            Err(e) => {
                error!("Documents lock poisoned: {}", e);
                Vec::new()
            }
        }
    }
}

impl Default for BackendState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<BackendState>;
