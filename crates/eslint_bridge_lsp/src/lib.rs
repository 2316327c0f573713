//! ESLint bridge LSP server
//!
//! Language Server Protocol front end for the ESLint bridge.
//! Publishes ESLint diagnostics and applies ESLint fixes on save.

mod config;
mod conversion;
mod debounce;
mod handler;
mod state;

use std::sync::Arc;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, error, info};

use crate::conversion::to_lsp_diagnostic;
use crate::debounce::spawn_debounced_validation;
use crate::state::{BackendState, SharedState};

pub use handler::FIX_ALL_KIND;

/// The LSP backend for the ESLint bridge.
#[derive(Clone)]
pub struct Backend {
    /// LSP client for sending notifications.
    client: Client,
    /// Shared state
    state: SharedState,
}

impl Backend {
    /// Creates a new backend with the given client.
    ///
    /// Nothing is linted until settings arrive through `initialize` or
    /// `workspace/didChangeConfiguration`.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(BackendState::new()),
        }
    }

    /// Lints a document and publishes its diagnostics.
    ///
    /// Results of a request overtaken by a newer one for the same document
    /// are dropped.
    async fn validate_document(&self, uri: &Url, text: &str, version: Option<i32>) {
        debug!("Validating document: {}", uri);

        let path = match uri.to_file_path() {
            Ok(p) => p,
            Err(_) => {
                debug!("Skipping validation for non-file URI: {}", uri);
                return;
            }
        };

        let Some(linter) = self.state.linter() else {
            debug!("ESLint not configured, skipping {}", uri);
            return;
        };

        let ticket = self.state.sequencer.begin(uri.clone());
        let outcome = linter.diagnose(&path, Some(text)).await;

        if !self.state.sequencer.is_current(&ticket) {
            debug!("Discarding stale diagnostics #{} for {}", ticket.seq(), uri);
            return;
        }

        let mut failure = None;
        let diagnostics = outcome
            .report(|e| {
                error!("ESLint failed for {}: {}", path.display(), e);
                failure = Some(e.to_string());
            })
            .unwrap_or_default();

        if let Some(message) = failure {
            self.client
                .log_message(MessageType::WARNING, format!("ESLint: {}", message))
                .await;
        }

        let lsp_diagnostics: Vec<Diagnostic> = diagnostics.iter().map(to_lsp_diagnostic).collect();

        self.client
            .publish_diagnostics(uri.clone(), lsp_diagnostics, version)
            .await;
    }

    /// Relints every open document, e.g. after settings or config files change.
    fn revalidate_open_documents(&self) {
        for (uri, text, version) in self.state.open_documents() {
            let backend = self.clone();
            tokio::spawn(async move {
                backend.validate_document(&uri, &text, Some(version)).await;
            });
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handler::handle_initialize(&self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        handler::handle_initialized(&self.client).await;
    }

    async fn shutdown(&self) -> Result<()> {
        handler::handle_shutdown().await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let (uri, text, version) = handler::handle_did_open(&self.state, params).await;
        self.validate_document(&uri, &text, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Some((uri, text, version)) = handler::handle_did_change(&self.state, params).await {
            let backend = self.clone();
            spawn_debounced_validation(
                self.state.clone(),
                uri,
                text,
                version,
                move |uri, text, version| async move {
                    backend.validate_document(&uri, &text, version).await;
                },
            );
        }
    }

    async fn will_save_wait_until(
        &self,
        params: WillSaveTextDocumentParams,
    ) -> Result<Option<Vec<TextEdit>>> {
        handler::handle_will_save_wait_until(&self.state, params).await
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        if let Some((uri, text)) = handler::handle_did_save(&self.state, params).await {
            self.validate_document(&uri, &text, None).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = handler::handle_did_close(&self.state, params).await;
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        if let Some(message) = handler::handle_did_change_configuration(&self.state, params).await
        {
            self.client
                .show_message(MessageType::ERROR, message)
                .await;
        }
        self.revalidate_open_documents();
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        if handler::handle_did_change_watched_files(&self.state, params).await {
            self.revalidate_open_documents();
        }
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        handler::handle_code_action(&self.state, params).await
    }
}

/// Starts the LSP server.
///
/// This function does not return unless an error occurs or the server shuts down.
pub async fn run() {
    info!("ESLint bridge LSP server starting...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
