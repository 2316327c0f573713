//! Linter error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while resolving settings or running ESLint.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external process could not be started.
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external process wrote to standard error.
    #[error("`{command}` failed (exit code {}): {stderr}", display_code(.exit_code))]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The external process did not exit in time and was killed.
    #[error("`{command}` timed out after {}ms", .timeout.as_millis())]
    Timeout { command: String, timeout: Duration },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_mentions_command_code_and_stderr() {
        let err = LinterError::Process {
            command: "/bin/sh -c eslint".to_string(),
            exit_code: Some(2),
            stderr: "Oops! Something went wrong!".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("/bin/sh -c eslint"));
        assert!(text.contains("exit code 2"));
        assert!(text.contains("Oops! Something went wrong!"));
    }

    #[test]
    fn test_process_error_without_exit_code() {
        let err = LinterError::Process {
            command: "eslint".to_string(),
            exit_code: None,
            stderr: "killed".to_string(),
        };

        assert!(err.to_string().contains("exit code none"));
    }

    #[test]
    fn test_timeout_error_display() {
        let err = LinterError::Timeout {
            command: "eslint".to_string(),
            timeout: Duration::from_millis(1500),
        };

        assert_eq!(err.to_string(), "`eslint` timed out after 1500ms");
    }
}
