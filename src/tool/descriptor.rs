// ABOUTME: Defines Descriptor - a tool's identity and policy flags - and the
// ABOUTME: ToolDefinition exported to model function-calling layers.

use serde::{Deserialize, Serialize};

/// Immutable identity and policy metadata of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Unique, human-readable name.
    pub name: String,

    /// Tells the calling agent when the tool applies.
    pub description: String,

    /// A human must approve the call before it runs.
    pub requires_review: bool,

    /// A human must supply a value in answer to the result.
    pub requires_response: bool,

    /// The result should be handed back verbatim, bypassing the agent.
    pub return_direct: bool,
}

impl Descriptor {
    /// Create a descriptor with every flag off.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            requires_review: false,
            requires_response: false,
            return_direct: false,
        }
    }

    pub fn requires_review(mut self, value: bool) -> Self {
        self.requires_review = value;
        self
    }

    pub fn requires_response(mut self, value: bool) -> Self {
        self.requires_response = value;
        self
    }

    pub fn return_direct(mut self, value: bool) -> Self {
        self.return_direct = value;
        self
    }
}

/// Function-calling definition of a tool, as consumed by LLM APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
