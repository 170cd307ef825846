use crate::base::ImportStatement;
use crate::error::{DefaultValueError, Result};
use crate::symbols::SymbolResolver;

use super::value::remove_first_parens;
use super::{DefaultValueReader, Resolution, ResolvedDefaultValue, SamePackagePolicy};

impl DefaultValueReader {
    // ============================================================
    // Importable head
    // ============================================================

    /// The symbol an expression starts with: `Color` for `Color.Red`,
    /// `Factory` for `Factory().build()`.
    ///
    /// Calls may not carry arguments; those cannot be re-emitted safely.
    pub(super) fn importable_symbol(expression: &str, near: &str) -> Result<String> {
        let head = remove_first_parens(expression);
        if expression.len() - head.len() > 2 {
            return Err(DefaultValueError::call_with_arguments(near));
        }

        let symbol = head.split('.').next().unwrap_or_default();
        // `emptyList<String>` is imported as `emptyList`
        let symbol = symbol.split('<').next().unwrap_or_default();
        Ok(symbol.to_string())
    }

    // ============================================================
    // Import resolution
    // ============================================================

    /// Decide which imports `expression` needs, in priority order:
    /// explicit import, same package, a single wildcard import, builtin,
    /// then every wildcard import as a fallback.
    pub(super) fn resolve_imports<R>(
        &self,
        resolver: &R,
        expression: &str,
        near: &str,
        package: &str,
        imports: &[ImportStatement],
    ) -> Result<ResolvedDefaultValue>
    where
        R: SymbolResolver + ?Sized,
    {
        let symbol = Self::importable_symbol(expression, near)?;
        let resolved = |required, resolution| {
            ResolvedDefaultValue::new(expression, required, resolution)
        };

        if let Some(import) = imports.iter().find(|import| import.imports_name(&symbol)) {
            tracing::trace!("[IMPORT] '{}' via explicit import {}", symbol, import);
            return Ok(resolved(vec![import.clone()], Resolution::ExplicitImport));
        }

        let local = resolver.access(package, &symbol);
        if local.is_accessible() {
            tracing::trace!("[IMPORT] '{}' declared in package {}", symbol, package);
            let required = match self.options.same_package_policy {
                SamePackagePolicy::Omit => Vec::new(),
                SamePackagePolicy::Qualify => {
                    vec![ImportStatement::new(format!("{package}.{symbol}"))]
                }
            };
            return Ok(resolved(required, Resolution::SamePackage));
        }

        let wildcards: Vec<&ImportStatement> =
            imports.iter().filter(|import| import.is_wildcard()).collect();
        let providers: Vec<&ImportStatement> = wildcards
            .iter()
            .copied()
            .filter(|import| {
                import
                    .wildcard_package()
                    .is_some_and(|pkg| resolver.access(pkg, &symbol).is_accessible())
            })
            .collect();
        if let [single] = providers.as_slice() {
            tracing::trace!("[IMPORT] '{}' via wildcard import {}", symbol, single);
            return Ok(resolved(vec![(*single).clone()], Resolution::WildcardImport));
        }

        if self.options.is_builtin_constructor(&symbol) {
            return Ok(resolved(Vec::new(), Resolution::Builtin));
        }

        if local.is_private() {
            return Err(DefaultValueError::InaccessibleDefaultValueSymbol {
                symbol,
                package: package.to_string(),
                near: near.to_string(),
            });
        }

        tracing::warn!(
            "Could not resolve '{}' unambiguously ({} candidate package(s)); requiring all {} wildcard import(s)",
            symbol,
            providers.len(),
            wildcards.len()
        );
        let required = wildcards.into_iter().cloned().collect();
        Ok(resolved(required, Resolution::AmbiguousImportFallback))
    }
}
