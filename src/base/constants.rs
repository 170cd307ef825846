//! Source-language tokens recognised while scanning declarations.

/// Keyword that starts an import line.
pub const IMPORT_KEYWORD: &str = "import";

/// Separates a parameter name from its declared type.
pub const TYPE_SEPARATOR: &str = ":";

/// Introduces a parameter's default value.
pub const ASSIGNMENT: &str = "=";

/// Suffix marking an import that brings a whole package into scope.
pub const WILDCARD_SUFFIX: &str = ".*";

/// Literal tokens that never need an import.
pub const LITERAL_KEYWORDS: &[&str] = &["true", "false", "null"];

/// Collection constructors available without any import.
pub const BUILTIN_CONSTRUCTORS: &[&str] = &["arrayListOf", "arrayOf"];
