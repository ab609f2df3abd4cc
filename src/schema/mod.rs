// ABOUTME: Schema module - declarative input shapes for tools.
// ABOUTME: Validates untrusted JSON and exports JSON Schema for function calling.

mod field;
mod input;

pub use field::*;
pub use input::*;
