//! Normalized diagnostics and their mapping from ESLint messages.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

/// Prefix of ESLint's notice that a file matched an ignore pattern.
const FILE_IGNORED_PREFIX: &str = "File ignored";

/// Severity level for diagnostics.
///
/// Serialized as ESLint's numeric level so a normalized list can be fed back
/// through [`map_messages`] unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Warning - should be reviewed.
    Warning,
    /// Error - must be fixed.
    Error,
}

impl Severity {
    /// Maps an ESLint severity value: 2 is an error, 1 a warning, anything
    /// else is informational.
    pub fn from_eslint(value: &Value) -> Self {
        match value.as_f64() {
            Some(level) if level == 2.0 => Severity::Error,
            Some(level) if level == 1.0 => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Returns ESLint's numeric level.
    pub fn as_eslint(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_eslint())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Severity::from_eslint(&value))
    }
}

/// A single lint finding, positions 1-based as ESLint reports them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDiagnostic {
    /// The diagnostic message.
    pub message: String,

    /// Start line (1-based).
    pub line: u32,

    /// Start column (1-based).
    pub column: u32,

    /// End line (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,

    /// End column (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The ESLint rule that produced this diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl LintDiagnostic {
    /// Creates a new diagnostic.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            end_line: None,
            end_column: None,
            severity: Severity::Info,
            rule_id: None,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the end position.
    pub fn with_end(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }

    /// Sets the rule id.
    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    /// Maps one ESLint message object.
    ///
    /// Returns `None` when `message`, `line` or `column` is missing or has the
    /// wrong type.
    pub fn from_eslint(value: &Value) -> Option<Self> {
        let message = value.get("message")?.as_str()?;
        let line = as_position(value.get("line")?)?;
        let column = as_position(value.get("column")?)?;

        Some(Self {
            message: message.to_string(),
            line,
            column,
            end_line: value.get("endLine").and_then(as_position),
            end_column: value.get("endColumn").and_then(as_position),
            severity: value
                .get("severity")
                .map(Severity::from_eslint)
                .unwrap_or_default(),
            rule_id: value
                .get("ruleId")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// Whether `value` is ESLint's "file ignored" notice rather than a finding.
///
/// ESLint emits the notice without a position, so this is checked on the raw
/// message before any field validation.
fn is_ignored_file_notice(value: &Value) -> bool {
    let is_warning = value
        .get("severity")
        .is_some_and(|s| Severity::from_eslint(s) == Severity::Warning);
    let text = value.get("message").and_then(Value::as_str);
    is_warning && text.is_some_and(|t| t.starts_with(FILE_IGNORED_PREFIX))
}

fn as_position(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    // ESLint emits integers, but a float line number is still a number.
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32)
}

/// Maps ESLint message objects into normalized diagnostics.
///
/// Malformed entries are logged and dropped; "file ignored" notices are
/// suppressed.
pub fn map_messages(messages: &[Value]) -> Vec<LintDiagnostic> {
    messages
        .iter()
        .filter(|value| !is_ignored_file_notice(value))
        .filter_map(|value| {
            let diag = LintDiagnostic::from_eslint(value);
            if diag.is_none() {
                warn!("Dropping malformed ESLint message: {}", value);
            }
            diag
        })
        .collect()
}
