//! # defval-base
//!
//! Recovers the source text of a parameter's default value, plus the imports
//! generated code needs to reproduce it, when the symbol model only says
//! *that* a default exists.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parameter → ValueParameter glue, parallel batch lookup
//!   ↓
//! reader    → Anchor scanner, value slicing, import resolution
//!   ↓
//! source    → Declaration line + import extraction from files
//!   ↓
//! symbols   → SymbolResolver capability, DeclarationTable
//!   ↓
//! base      → SourceLocation, ImportStatement, language constants
//! ```
//!
//! ## Example
//!
//! ```rust
//! use defval::{DeclarationTable, ImportStatement, Resolution, read_default_value};
//!
//! let table = DeclarationTable::new();
//! let imports = [ImportStatement::new("com.pkg.Color")];
//! let value = read_default_value(
//!     &table,
//!     "    val color: Color = Color.Red,",
//!     "com.app",
//!     &imports,
//!     "color",
//!     "Color",
//! )?;
//!
//! assert_eq!(value.expression_text, "Color.Red");
//! assert_eq!(value.required_imports, ["com.pkg.Color"]);
//! assert_eq!(value.resolution, Resolution::ExplicitImport);
//! # Ok::<(), defval::DefaultValueError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → source → reader → parameter)
// ============================================================================

/// Foundation types: SourceLocation, ImportStatement, constants
pub mod base;

/// Error taxonomy shared by every stage
pub mod error;

/// Symbol lookup capability and an in-memory implementation
pub mod symbols;

/// Declaration line and import extraction
pub mod source;

/// Default-value slicing and import resolution
pub mod reader;

/// Parameter-level lookups
pub mod parameter;

pub use base::{ImportStatement, SourceLocation};
pub use error::{DefaultValueError, Result};
pub use parameter::ValueParameter;
pub use reader::{
    DefaultValueReader, ReaderOptions, Resolution, ResolvedDefaultValue, SamePackagePolicy,
    ScanStage, read_default_value,
};
pub use source::{LineExtractor, SourceLine, read_line_and_imports};
pub use symbols::{
    Declaration, DeclarationTable, ResolvedSymbol, SymbolAccess, SymbolResolver, Visibility,
};
