//! Utility-CSS build configuration
//!
//! Provides the typed schema, the project's built-in configuration, and
//! loading/validation of `tailwind.config.*` files.

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validate;

pub use builtin::load;
pub use loader::*;
pub use schema::*;
pub use validate::{has_errors, Severity, ValidationIssue};
