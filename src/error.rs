// ABOUTME: Defines all error types for structools using thiserror.
// ABOUTME: Validation, tool, and config errors are unified under Error.

use std::fmt;

/// Top-level error type returned by `StructuredTool::call`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Raw input rejected by a tool's input schema.
///
/// The display message always embeds the serialized raw input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Received tool input did not match expected schema {input}: {}",
    FieldIssues(.issues)
)]
pub struct SchemaValidationError {
    /// The offending input, serialized as JSON.
    pub input: String,

    /// Every problem found, in schema field order.
    pub issues: Vec<FieldIssue>,
}

/// A single validation problem, located by field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name, or empty for the input as a whole.
    pub path: String,

    pub reason: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

struct FieldIssues<'a>(&'a [FieldIssue]);

impl fmt::Display for FieldIssues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Errors raised by adapter logic.
///
/// Adapters normalize external failures to a short message and keep the
/// underlying cause reachable through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Failed to send email.")]
    Delivery(#[source] anyhow::Error),

    #[error("Failed to perform a search.")]
    Search(#[source] anyhow::Error),

    #[error("Failed to evaluate expression: {expression}")]
    Evaluation {
        expression: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Errors building an adapter from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
