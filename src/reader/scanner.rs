//! Anchor scanner that isolates the text after `name: Type =`.

use std::fmt;

use crate::error::{DefaultValueError, Result};

/// Where the anchor scanner is in a declaration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanStage {
    SeekName,
    SeekSeparator,
    SeekType,
    SeekAssignment,
    ScanningValue,
}

impl ScanStage {
    fn next(self) -> Self {
        match self {
            Self::SeekName => Self::SeekSeparator,
            Self::SeekSeparator => Self::SeekType,
            Self::SeekType => Self::SeekAssignment,
            Self::SeekAssignment | Self::ScanningValue => Self::ScanningValue,
        }
    }
}

impl fmt::Display for ScanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SeekName => "seeking the parameter name",
            Self::SeekSeparator => "seeking the type separator",
            Self::SeekType => "seeking the declared type",
            Self::SeekAssignment => "seeking the assignment",
            Self::ScanningValue => "scanning the value",
        })
    }
}

/// Walks a line anchor by anchor, never moving backwards.
#[derive(Debug, Clone)]
pub(crate) struct AnchorScanner<'a> {
    line: &'a str,
    cursor: usize,
    stage: ScanStage,
}

impl<'a> AnchorScanner<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self {
            line,
            cursor: 0,
            stage: ScanStage::SeekName,
        }
    }

    pub(crate) fn stage(&self) -> ScanStage {
        self.stage
    }

    /// Consume everything up to and including the next occurrence of `anchor`
    pub(crate) fn expect(&mut self, anchor: &str) -> Result<()> {
        let found = match self.line[self.cursor..].find(anchor) {
            Some(offset) if !anchor.is_empty() => offset,
            _ => {
                return Err(DefaultValueError::AnchorNotFound {
                    anchor: anchor.to_string(),
                    stage: self.stage,
                    line: self.line.to_string(),
                });
            }
        };
        self.cursor += found + anchor.len();
        tracing::trace!(
            "[ANCHOR] '{}' matched, {} -> {}",
            anchor,
            self.stage,
            self.stage.next()
        );
        self.stage = self.stage.next();
        Ok(())
    }

    /// The unconsumed text with leading blanks removed
    pub(crate) fn rest(&self) -> &'a str {
        self.line[self.cursor..].trim_start_matches([' ', '\t'])
    }
}

/// Slice the default-value text out of a `name: Type = value` line.
pub(crate) fn slice_value<'a>(
    line: &'a str,
    name: &str,
    separator: &str,
    type_name: &str,
    assignment: &str,
) -> Result<&'a str> {
    let mut scanner = AnchorScanner::new(line);
    for anchor in [name, separator, type_name, assignment] {
        scanner.expect(anchor)?;
    }
    debug_assert_eq!(scanner.stage(), ScanStage::ScanningValue);

    let value = scanner.rest();
    if value.trim().is_empty() {
        return Err(DefaultValueError::EmptyDefaultValue {
            line: line.to_string(),
        });
    }
    Ok(value)
}
