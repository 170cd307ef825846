use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{ResolvedSymbol, SymbolResolver};

/// Declared visibility of a top-level symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Private,
}

impl Visibility {
    /// Public and internal declarations are visible to generated code in the same module
    pub fn is_accessible(self) -> bool {
        !matches!(self, Self::Private)
    }
}

/// A top-level declaration known to a [`DeclarationTable`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub name: SmolStr,
    pub visibility: Visibility,
}

impl Declaration {
    pub fn new(name: impl AsRef<str>, visibility: Visibility) -> Self {
        Self {
            name: SmolStr::new(name.as_ref()),
            visibility,
        }
    }
}

/// In-memory package → declarations index.
///
/// Lookups match simple names exactly. When a package declares the same name
/// twice (overloads), the first accessible declaration wins.
#[derive(Debug, Clone, Default)]
pub struct DeclarationTable {
    packages: FxHashMap<SmolStr, Vec<Declaration>>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration in `package`
    pub fn declare(&mut self, package: &str, name: &str, visibility: Visibility) {
        self.packages
            .entry(SmolStr::new(package))
            .or_default()
            .push(Declaration::new(name, visibility));
    }

    /// Builder form of [`DeclarationTable::declare`]
    pub fn with(mut self, package: &str, name: &str, visibility: Visibility) -> Self {
        self.declare(package, name, visibility);
        self
    }

    /// All declarations registered for `package`, in insertion order
    pub fn declarations(&self, package: &str) -> &[Declaration] {
        self.packages
            .get(package)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl SymbolResolver for DeclarationTable {
    fn resolve(&self, package: &str, name: &str) -> Option<ResolvedSymbol> {
        let mut matches = self
            .declarations(package)
            .iter()
            .filter(|decl| decl.name.as_str() == name)
            .peekable();
        matches.peek()?;
        let is_accessible = matches.any(|decl| decl.visibility.is_accessible());
        Some(ResolvedSymbol { is_accessible })
    }
}
