//! Locate command implementation

use std::path::Path;

use miette::Result;
use tracing::warn;

use eslint_bridge_core::{BridgeSettings, Linter};

/// Prints the config governing `file`. Returns true when none is found.
pub fn run_locate(settings: BridgeSettings, file: &Path) -> Result<bool> {
    match Linter::new(settings).locate_config(file) {
        Some(config) => {
            println!("{}", config.display());
            Ok(false)
        }
        None => {
            warn!("No ESLint config found for {}", file.display());
            Ok(true)
        }
    }
}
