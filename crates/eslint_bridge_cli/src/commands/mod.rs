//! Subcommand implementations

mod lint;
mod locate;
mod lsp;

pub use lint::run_lint;
pub use locate::run_locate;
pub use lsp::run_lsp;
