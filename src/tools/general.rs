// ABOUTME: Conversational tools - AskUser and ConversationTool.
// ABOUTME: Both echo their input; AskUser flags that a human must answer.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::schema::{Field, InputSchema};
use crate::tool::{Describe, Descriptor, Tool};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskUserInput {
    pub question: String,
}

/// Poses a question to the user. The orchestrator blocks for the answer.
pub struct AskUser {
    descriptor: Descriptor,
    schema: InputSchema,
}

impl Default for AskUser {
    fn default() -> Self {
        Self::new()
    }
}

impl AskUser {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor::new(
                "Ask User",
                "use this when you need to ask the user a question",
            )
            .requires_response(true),
            schema: InputSchema::new().field(
                Field::string("question").describe("The question you would like to ask the user"),
            ),
        }
    }
}

impl Describe for AskUser {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn schema(&self) -> &InputSchema {
        &self.schema
    }
}

#[async_trait]
impl Tool for AskUser {
    type Input = AskUserInput;

    async fn invoke(&self, input: AskUserInput) -> Result<String, ToolError> {
        Ok(input.question)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversationInput {
    pub response: String,
}

/// Lets the agent reply conversationally when no other tool fits.
pub struct ConversationTool {
    descriptor: Descriptor,
    schema: InputSchema,
}

impl Default for ConversationTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationTool {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor::new(
                "Conversation",
                "use this when the user strikes up a conversation e.g. they ask 'How are you?'. \
                 Useful if none of the other tools are appropriate. You can respond however you deem appropriate",
            ),
            schema: InputSchema::new()
                .field(Field::string("response").describe("Your response to the user")),
        }
    }
}

impl Describe for ConversationTool {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn schema(&self) -> &InputSchema {
        &self.schema
    }
}

#[async_trait]
impl Tool for ConversationTool {
    type Input = ConversationInput;

    async fn invoke(&self, input: ConversationInput) -> Result<String, ToolError> {
        Ok(input.response)
    }
}
