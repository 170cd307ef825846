//! Symbol lookup capability used during import resolution.
//!
//! The reader never reaches into a global symbol model. Callers hand it a
//! [`SymbolResolver`], either a closure over their own declarations or the
//! in-memory [`DeclarationTable`].

mod table;

pub use table::{Declaration, DeclarationTable, Visibility};

/// A declaration found by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedSymbol {
    /// Public or internal, i.e. reachable from generated code
    pub is_accessible: bool,
}

impl ResolvedSymbol {
    pub fn accessible() -> Self {
        Self {
            is_accessible: true,
        }
    }

    pub fn private() -> Self {
        Self {
            is_accessible: false,
        }
    }
}

/// Collapsed view of a resolver answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolAccess {
    Accessible,
    Private,
    Missing,
}

impl SymbolAccess {
    pub fn of(symbol: Option<ResolvedSymbol>) -> Self {
        match symbol {
            Some(ResolvedSymbol {
                is_accessible: true,
            }) => Self::Accessible,
            Some(_) => Self::Private,
            None => Self::Missing,
        }
    }

    pub fn is_accessible(self) -> bool {
        matches!(self, Self::Accessible)
    }

    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Answers whether `name` is declared in `package`, and whether it is reachable.
///
/// Implementations must be free of side effects; the reader may ask the same
/// question more than once per lookup.
pub trait SymbolResolver {
    fn resolve(&self, package: &str, name: &str) -> Option<ResolvedSymbol>;

    /// Classify the answer for `name` in `package`
    fn access(&self, package: &str, name: &str) -> SymbolAccess {
        SymbolAccess::of(self.resolve(package, name))
    }
}

impl<F> SymbolResolver for F
where
    F: Fn(&str, &str) -> Option<ResolvedSymbol>,
{
    fn resolve(&self, package: &str, name: &str) -> Option<ResolvedSymbol> {
        self(package, name)
    }
}
