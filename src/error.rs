//! Error types for default-value recovery.
//!
//! Every variant is fatal for the parameter being processed. Callers turn
//! these into diagnostics that point at the offending parameter.

use std::path::PathBuf;

use thiserror::Error;

use crate::reader::ScanStage;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DefaultValueError>;

/// Errors that can occur while recovering a default value.
#[derive(Debug, Error)]
pub enum DefaultValueError {
    /// The parameter declares a default but its source cannot be read.
    #[error(
        "cannot detect default value for argument '{parameter}' because its source code is not available"
    )]
    NoSourceAvailable { parameter: String },

    /// One of the structural anchors is missing from the declaration line.
    #[error("expected '{anchor}' while {stage} in line: {line}")]
    AnchorNotFound {
        anchor: String,
        stage: ScanStage,
        line: String,
    },

    /// Nothing follows the assignment operator on the declaration line.
    #[error("default value does not start on the declaration line: {line}")]
    EmptyDefaultValue { line: String },

    /// A string or char literal has no closing quote on the declaration line.
    #[error("unterminated literal as default value (near: '{near}')")]
    UnterminatedStringLiteral { near: String },

    /// A call expression does not close on the declaration line.
    #[error("multiline function calls as default value are not supported (near: '{near}')")]
    UnsupportedMultilineCall { near: String },

    /// A call expression passes arguments.
    #[error(
        "function calls with parameters as default value are not supported (near: '{near}')"
    )]
    UnsupportedCallWithArguments { near: String },

    /// The default value refers to a private declaration.
    #[error(
        "default values using the private declaration '{package}.{symbol}' are not supported (near: '{near}')"
    )]
    InaccessibleDefaultValueSymbol {
        symbol: String,
        package: String,
        near: String,
    },

    /// The source file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested line is 0 or past the end of the file.
    #[error("line {line} is out of range for {} ({available} line(s))", .path.display())]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        available: usize,
    },
}

impl DefaultValueError {
    /// Create a no-source error for the named parameter.
    pub fn no_source(parameter: impl Into<String>) -> Self {
        Self::NoSourceAvailable {
            parameter: parameter.into(),
        }
    }

    /// Create a multiline call error.
    pub fn multiline_call(near: impl Into<String>) -> Self {
        Self::UnsupportedMultilineCall { near: near.into() }
    }

    /// Create a call-with-arguments error.
    pub fn call_with_arguments(near: impl Into<String>) -> Self {
        Self::UnsupportedCallWithArguments { near: near.into() }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
