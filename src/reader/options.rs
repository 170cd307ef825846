//! Reader options

use crate::base::constants::{
    ASSIGNMENT, BUILTIN_CONSTRUCTORS, IMPORT_KEYWORD, LITERAL_KEYWORDS, TYPE_SEPARATOR,
};

/// What to require when a default value names a symbol from its own package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamePackagePolicy {
    /// No import; the generated code lives in the same package
    #[default]
    Omit,
    /// Require `<package>.<symbol>` explicitly
    Qualify,
}

/// Tokens and policies used while reading default values
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Separates the parameter name from its type
    pub separator: String,
    /// Introduces the default value
    pub assignment: String,
    /// Starts an import line
    pub import_keyword: String,
    /// Whole-value tokens that never need an import
    pub literal_keywords: Vec<String>,
    /// Call heads that are always in scope
    pub builtin_constructors: Vec<String>,
    pub same_package_policy: SamePackagePolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            separator: TYPE_SEPARATOR.to_string(),
            assignment: ASSIGNMENT.to_string(),
            import_keyword: IMPORT_KEYWORD.to_string(),
            literal_keywords: LITERAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            builtin_constructors: BUILTIN_CONSTRUCTORS.iter().map(|s| s.to_string()).collect(),
            same_package_policy: SamePackagePolicy::Omit,
        }
    }
}

impl ReaderOptions {
    pub fn with_same_package_policy(mut self, policy: SamePackagePolicy) -> Self {
        self.same_package_policy = policy;
        self
    }

    /// Add a call head that needs no import, e.g. `mutableListOf`
    pub fn with_builtin_constructor(mut self, name: impl Into<String>) -> Self {
        self.builtin_constructors.push(name.into());
        self
    }

    pub fn with_import_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.import_keyword = keyword.into();
        self
    }

    pub(crate) fn is_literal_keyword(&self, text: &str) -> bool {
        self.literal_keywords.iter().any(|kw| kw == text)
    }

    pub(crate) fn is_builtin_constructor(&self, symbol: &str) -> bool {
        self.builtin_constructors.iter().any(|name| name == symbol)
    }
}
