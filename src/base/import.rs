use std::fmt;

use smol_str::SmolStr;

use super::constants::WILDCARD_SUFFIX;

/// A single import path as written in source, e.g. `a.b.C` or `a.b.*`.
///
/// Kept verbatim in file order; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ImportStatement(SmolStr);

impl ImportStatement {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(SmolStr::new(path.as_ref()))
    }

    /// Parse an import line, returning `None` if the line is not an import.
    ///
    /// The keyword must be followed by whitespace so that identifiers such as
    /// `importer` are not mistaken for imports. A trailing `;` is dropped.
    pub fn parse_line(line: &str, keyword: &str) -> Option<Self> {
        let rest = line.strip_prefix(keyword)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_end_matches(';').trim_end();
        (!path.is_empty()).then(|| Self::new(path))
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    /// Check if this import brings a whole package into scope (ends with `.*`)
    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with(WILDCARD_SUFFIX)
    }

    /// The package a wildcard import opens, or `None` for explicit imports
    pub fn wildcard_package(&self) -> Option<&str> {
        self.0.strip_suffix(WILDCARD_SUFFIX)
    }

    /// Check if an explicit import names `symbol` (`a.b.Symbol` or bare `Symbol`).
    ///
    /// An aliased import `a.b.Symbol as Alias` names only `Alias`.
    pub fn imports_name(&self, symbol: &str) -> bool {
        if self.is_wildcard() {
            return false;
        }
        if let Some((_, alias)) = self.0.split_once(" as ") {
            return alias.trim() == symbol;
        }
        match self.0.strip_suffix(symbol) {
            Some("") => true,
            Some(prefix) => prefix.ends_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImportStatement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImportStatement {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ImportStatement {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl PartialEq<str> for ImportStatement {
    fn eq(&self, other: &str) -> bool {
        self.0.as_str() == other
    }
}

impl PartialEq<&str> for ImportStatement {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_str() == *other
    }
}
