//! Parameter-level entry points: locate the source, read the line, read the value.

use rayon::prelude::*;

use crate::base::SourceLocation;
use crate::error::{DefaultValueError, Result};
use crate::reader::{DefaultValueReader, ResolvedDefaultValue};
use crate::source::LineExtractor;
use crate::symbols::SymbolResolver;

/// What the caller knows about a value parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueParameter {
    pub name: String,
    /// Declared type as written, e.g. `Color` or `List<Int>`
    pub type_name: String,
    /// Package of the file declaring the parameter
    pub package_name: String,
    pub has_default: bool,
    pub location: SourceLocation,
}

impl ValueParameter {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            package_name: package_name.into(),
            has_default: false,
            location: SourceLocation::Unavailable,
        }
    }

    /// Mark the parameter as having a default declared at `location`
    pub fn with_default_at(mut self, location: SourceLocation) -> Self {
        self.has_default = true;
        self.location = location;
        self
    }
}

impl DefaultValueReader {
    /// Recover the default value of `parameter` from its source file.
    ///
    /// Returns `Ok(None)` when the parameter declares no default.
    pub fn default_value_for<R>(
        &self,
        parameter: &ValueParameter,
        resolver: &R,
    ) -> Result<Option<ResolvedDefaultValue>>
    where
        R: SymbolResolver + ?Sized,
    {
        if !parameter.has_default {
            return Ok(None);
        }

        let (path, line) = parameter
            .location
            .as_file()
            .ok_or_else(|| DefaultValueError::no_source(&parameter.name))?;

        let source = LineExtractor::with_keyword(&self.options().import_keyword)
            .read_file(path, line)?;

        self.read_default_value(
            resolver,
            &source.text,
            &parameter.package_name,
            &source.imports,
            &parameter.name,
            &parameter.type_name,
        )
        .map(Some)
    }

    /// Recover default values for many parameters in parallel.
    ///
    /// Results keep the order of `parameters`; one failure does not affect the others.
    pub fn default_values_for<R>(
        &self,
        parameters: &[ValueParameter],
        resolver: &R,
    ) -> Vec<Result<Option<ResolvedDefaultValue>>>
    where
        R: SymbolResolver + Sync + ?Sized,
    {
        parameters
            .par_iter()
            .map(|parameter| self.default_value_for(parameter, resolver))
            .collect()
    }
}
