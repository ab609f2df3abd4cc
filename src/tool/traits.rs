// ABOUTME: Defines the Tool trait for typed adapters and the StructuredTool
// ABOUTME: trait that validates raw input before any adapter logic runs.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Descriptor, ToolDefinition};
use crate::error::{Error, FieldIssue, SchemaValidationError, ToolError};
use crate::schema::InputSchema;

/// Metadata every tool exposes to an orchestrator.
pub trait Describe: Send + Sync {
    fn descriptor(&self) -> &Descriptor;

    fn schema(&self) -> &InputSchema;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    fn description(&self) -> &str {
        &self.descriptor().description
    }

    /// Definition for model function calling.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.descriptor().name.clone(),
            description: self.descriptor().description.clone(),
            input_schema: self.schema().to_json_schema(),
        }
    }
}

/// A concrete tool adapter.
///
/// `invoke` only ever sees input that passed [`Describe::schema`] and
/// deserialized into `Self::Input`; adapters never validate on their own.
#[async_trait]
pub trait Tool: Describe {
    type Input: DeserializeOwned + Send;

    async fn invoke(&self, input: Self::Input) -> Result<String, ToolError>;
}

/// The uniform entry point for calling any tool with untrusted input.
///
/// Implemented for every [`Tool`], and object safe, so orchestrators can
/// hold `Arc<dyn StructuredTool>`.
#[async_trait]
pub trait StructuredTool: Describe {
    /// Validate `raw` against the schema, then run the adapter.
    ///
    /// Validation failures become [`Error::Validation`]; adapter failures
    /// are returned unchanged as [`Error::Tool`].
    async fn call(&self, raw: serde_json::Value) -> Result<String, Error>;
}

#[async_trait]
impl<T: Tool> StructuredTool for T {
    async fn call(&self, raw: serde_json::Value) -> Result<String, Error> {
        let input = match parse_input::<T::Input>(self.schema(), &raw) {
            Ok(input) => input,
            Err(err) => {
                debug!(tool = self.name(), error = %err, "tool input rejected");
                return Err(err.into());
            }
        };
        debug!(tool = self.name(), "invoking tool");
        Ok(self.invoke(input).await?)
    }
}

/// Validate raw input and deserialize it into the adapter's typed input.
pub fn parse_input<I: DeserializeOwned>(
    schema: &InputSchema,
    raw: &serde_json::Value,
) -> Result<I, SchemaValidationError> {
    let parsed = schema.validate(raw)?;
    serde_json::from_value(serde_json::Value::Object(parsed)).map_err(|e| SchemaValidationError {
        input: raw.to_string(),
        issues: vec![FieldIssue::new("", e.to_string())],
    })
}
