//! # eslint_bridge_core
//!
//! Runs the ESLint CLI on behalf of an editor.
//!
//! This crate provides:
//! - Upward discovery of the nearest ESLint config file
//! - Construction and execution of the ESLint command with a timeout
//! - Mapping of ESLint's JSON output into normalized diagnostics
//! - Whole-document fixes from `--fix-dry-run`
//! - Per-document request sequencing
//!
//! ## Example
//!
//! ```rust,ignore
//! use eslint_bridge_core::{BridgeSettings, Linter};
//!
//! let settings = BridgeSettings::new("/usr/local/bin/eslint", "/bin/sh");
//! let linter = Linter::new(settings);
//!
//! if let Some(diagnostics) = linter.diagnose(Path::new("src/a.js"), None).await.ok() {
//!     for d in diagnostics {
//!         println!("{}:{} {} {}", d.line, d.column, d.severity, d.message);
//!     }
//! }
//! ```

mod config;
mod diagnostic;
mod error;
mod fix;
mod invocation;
mod linter;
pub mod locator;
pub mod process;
mod report;
pub mod sequence;

pub use config::{BridgeSettings, DEFAULT_TIMEOUT_MS, SETTINGS_SECTION};
pub use diagnostic::{LintDiagnostic, Severity, map_messages};
pub use error::LinterError;
pub use fix::{FixResult, fixed_content};
pub use invocation::{LintInvocation, LintMode};
pub use linter::{Linter, Outcome};
pub use locator::{ConfigSearchSpec, DEFAULT_CONFIG_NAMES, MAX_ASCENT_DEPTH, locate};
pub use report::LintReport;
pub use sequence::{RequestSequencer, Ticket};

#[cfg(test)]
pub mod test_utils;
