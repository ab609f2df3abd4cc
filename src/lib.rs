// ABOUTME: Root module for structools - schema-validated tool adapters.
// ABOUTME: Re-exports all public types from submodules.

pub mod error;
pub mod prelude;
pub mod schema;
pub mod tool;
pub mod tools;

pub use error::Error;
