//! Foundation types for default-value recovery.
//!
//! This module provides the request-scoped values shared by every stage:
//! - [`SourceLocation`] - Where a parameter declaration lives (file + 1-based line)
//! - [`ImportStatement`] - One `import` line, explicit or wildcard
//! - Language constants (keywords, literal tokens, built-in constructors)
//!
//! This module has NO dependencies on other defval modules.

pub mod constants;
mod import;
mod location;

pub use import::ImportStatement;
pub use location::SourceLocation;
