//! Default-value reader.
//!
//! Given one declaration line such as `val color: Color = Color.Red,` the
//! reader:
//! - walks the anchors `name`, `:`, `Type`, `=` to find where the value starts
//! - cuts the value off at the end of its expression
//! - decides which imports generated code needs to reference it
//!
//! This is text slicing, not expression parsing. Calls with arguments and
//! calls spanning several lines are rejected instead of guessed at.

mod options;
mod resolve;
mod scanner;
mod value;

use std::fmt;

use crate::base::ImportStatement;
use crate::error::{DefaultValueError, Result};
use crate::symbols::SymbolResolver;

pub use options::{ReaderOptions, SamePackagePolicy};
pub use scanner::ScanStage;

/// How the required imports of a default value were decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// A quoted string
    StringLiteral,
    /// `true`/`false`/`null`, a number or a char
    Literal,
    /// An explicit import names the symbol
    ExplicitImport,
    /// The symbol lives in the parameter's own package
    SamePackage,
    /// Exactly one wildcard import provides the symbol
    WildcardImport,
    /// A constructor that is always in scope
    Builtin,
    /// Nothing matched unambiguously; every wildcard import is required
    AmbiguousImportFallback,
}

impl Resolution {
    /// Check if the imports are a best-effort guess callers may want to warn about
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::AmbiguousImportFallback)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StringLiteral => "string literal",
            Self::Literal => "literal",
            Self::ExplicitImport => "explicit import",
            Self::SamePackage => "same package",
            Self::WildcardImport => "wildcard import",
            Self::Builtin => "builtin",
            Self::AmbiguousImportFallback => "ambiguous import fallback",
        })
    }
}

/// A default-value expression and the imports needed to emit it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedDefaultValue {
    /// Source text of the expression, e.g. `Color.Red` or `"say \"hi\""`
    pub expression_text: String,
    /// Fully qualified imports, possibly empty
    pub required_imports: Vec<ImportStatement>,
    pub resolution: Resolution,
}

impl ResolvedDefaultValue {
    pub fn new(
        expression_text: impl Into<String>,
        required_imports: Vec<ImportStatement>,
        resolution: Resolution,
    ) -> Self {
        Self {
            expression_text: expression_text.into(),
            required_imports,
            resolution,
        }
    }

    /// A value that needs no import
    pub fn standalone(expression_text: impl Into<String>, resolution: Resolution) -> Self {
        Self::new(expression_text, Vec::new(), resolution)
    }
}

/// Reads default values out of declaration lines.
///
/// Holds no state between calls; the same inputs always give the same result.
#[derive(Debug, Clone, Default)]
pub struct DefaultValueReader {
    options: ReaderOptions,
}

impl DefaultValueReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Read the default value of `arg_name: arg_type` from `line`.
    ///
    /// `package` is the declaring package and `imports` the file's imports.
    pub fn read_default_value<R>(
        &self,
        resolver: &R,
        line: &str,
        package: &str,
        imports: &[ImportStatement],
        arg_name: &str,
        arg_type: &str,
    ) -> Result<ResolvedDefaultValue>
    where
        R: SymbolResolver + ?Sized,
    {
        let text = scanner::slice_value(
            line,
            arg_name,
            &self.options.separator,
            arg_type,
            &self.options.assignment,
        )?;

        if text.starts_with('"') {
            let literal = value::string_literal(text)?;
            return Ok(ResolvedDefaultValue::standalone(
                literal,
                Resolution::StringLiteral,
            ));
        }

        if text.starts_with('\'') {
            let literal = value::char_literal(text)?;
            return Ok(ResolvedDefaultValue::standalone(literal, Resolution::Literal));
        }

        let expression = if value::is_call_shaped(text) {
            value::call_expression(text)?
        } else {
            value::simple_expression(text)
        };
        if expression.is_empty() {
            return Err(DefaultValueError::EmptyDefaultValue {
                line: line.to_string(),
            });
        }

        if self.options.is_literal_keyword(expression)
            || value::is_self_contained_literal(expression)
        {
            return Ok(ResolvedDefaultValue::standalone(
                expression,
                Resolution::Literal,
            ));
        }

        let resolved = self.resolve_imports(resolver, expression, text, package, imports)?;
        tracing::debug!(
            "Default value for '{}' is '{}' ({})",
            arg_name,
            resolved.expression_text,
            resolved.resolution
        );
        Ok(resolved)
    }
}

/// Read a default value with the default options.
pub fn read_default_value<R>(
    resolver: &R,
    line: &str,
    package: &str,
    imports: &[ImportStatement],
    arg_name: &str,
    arg_type: &str,
) -> Result<ResolvedDefaultValue>
where
    R: SymbolResolver + ?Sized,
{
    DefaultValueReader::default().read_default_value(
        resolver, line, package, imports, arg_name, arg_type,
    )
}

#[cfg(test)]
mod tests;
