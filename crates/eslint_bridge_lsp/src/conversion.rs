//! LSP type conversion utilities.

use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range, TextEdit,
};

use eslint_bridge_core::{LintDiagnostic, Severity};

/// Source name attached to published diagnostics.
pub const DIAGNOSTIC_SOURCE: &str = "eslint";

/// Converts an ESLint diagnostic to an LSP diagnostic.
///
/// ESLint positions are 1-based, LSP positions 0-based. A missing end
/// collapses the range onto the start.
pub fn to_lsp_diagnostic(diag: &LintDiagnostic) -> Diagnostic {
    let start = to_position(diag.line, diag.column);
    let end = match (diag.end_line, diag.end_column) {
        (Some(line), Some(column)) => to_position(line, column),
        _ => start,
    };

    let severity = match diag.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    };

    Diagnostic {
        range: Range::new(start, end),
        severity: Some(severity),
        code: diag.rule_id.clone().map(NumberOrString::String),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diag.message.clone(),
        ..Default::default()
    }
}

fn to_position(line: u32, column: u32) -> Position {
    Position::new(line.saturating_sub(1), column.saturating_sub(1))
}

/// Builds the single edit that replaces all of `current` with `replacement`.
pub fn whole_document_edit(current: &str, replacement: String) -> TextEdit {
    TextEdit {
        range: full_range(current),
        new_text: replacement,
    }
}

/// Returns the range covering all of `text`.
pub fn full_range(text: &str) -> Range {
    let end = offset_to_position(text.len(), text).unwrap_or_default();
    Range::new(Position::new(0, 0), end)
}

/// Converts a byte offset to an LSP position.
pub fn offset_to_position(offset: usize, text: &str) -> Option<Position> {
    if offset > text.len() {
        return None;
    }

    let mut line = 0u32;
    let mut col = 0u32;
    let mut current_offset = 0;

    for ch in text.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.len_utf16() as u32;
        }

        current_offset += ch.len_utf8();
    }

    Some(Position::new(line, col))
}
