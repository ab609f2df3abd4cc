// ABOUTME: Tool module - the base contract every tool adapter plugs into.
// ABOUTME: Descriptors, the validate-then-invoke pipeline, and the registry.

mod descriptor;
mod registry;
mod traits;

pub use descriptor::*;
pub use registry::*;
pub use traits::*;
