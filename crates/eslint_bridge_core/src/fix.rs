//! Whole-document fixes proposed by `--fix-dry-run`.

use tracing::debug;

/// Full replacement text proposed for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixResult {
    /// The corrected document body.
    pub output: String,
}

impl FixResult {
    /// Creates a new fix result.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Returns the replacement body if it differs from `current`.
    ///
    /// The comparison is byte-for-byte; `None` means no edit is needed.
    pub fn apply_to(&self, current: &str) -> Option<&str> {
        if self.output.as_bytes() == current.as_bytes() {
            debug!("Fix output matches current content, nothing to apply");
            None
        } else {
            Some(&self.output)
        }
    }
}

/// Computes the new document body for an optional fix.
pub fn fixed_content<'a>(fix: Option<&'a FixResult>, current: &str) -> Option<&'a str> {
    fix.and_then(|f| f.apply_to(current))
}
