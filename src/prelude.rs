// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use structools::prelude::*;` to get started quickly.

pub use crate::error::{ConfigError, Error, FieldIssue, SchemaValidationError, ToolError};
pub use crate::schema::{Field, FieldKind, InputSchema};
pub use crate::tool::{Describe, Descriptor, Registry, StructuredTool, Tool, ToolDefinition};
pub use crate::tools::{
    AskUser, Calculator, ConversationTool, GoogleSearch, SearchResult, SendOutlookEmail,
};
