use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smol_str::SmolStr;

use crate::base::ImportStatement;
use crate::base::constants::IMPORT_KEYWORD;
use crate::error::{DefaultValueError, Result};

/// The target line of a declaration and the imports declared above it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLine {
    /// Raw text of the requested line (without the line terminator)
    pub text: String,
    /// Import paths from earlier lines, in file order
    pub imports: Vec<ImportStatement>,
}

/// Reads a declaration line together with the preceding imports.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    import_keyword: SmolStr,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self::with_keyword(IMPORT_KEYWORD)
    }

    /// Use a different keyword to recognise import lines
    pub fn with_keyword(keyword: &str) -> Self {
        Self {
            import_keyword: SmolStr::new(keyword),
        }
    }

    /// Read `line` (1-based) of the file at `path`.
    ///
    /// The file handle is dropped as soon as the target line is reached.
    pub fn read_file(&self, path: &Path, line: usize) -> Result<SourceLine> {
        let file = File::open(path).map_err(|e| DefaultValueError::io(path, e))?;
        self.read_from(BufReader::new(file), line, path)
    }

    /// Read `line` (1-based) from already-open text. `origin` is only used in errors.
    pub fn read_from<R: BufRead>(
        &self,
        reader: R,
        line: usize,
        origin: &Path,
    ) -> Result<SourceLine> {
        let out_of_range = |available| DefaultValueError::LineOutOfRange {
            path: origin.to_path_buf(),
            line,
            available,
        };
        if line == 0 {
            return Err(out_of_range(0));
        }

        let mut imports = Vec::new();
        let mut scanned = 0;
        for text in reader.lines() {
            let text = text.map_err(|e| DefaultValueError::io(origin, e))?;
            scanned += 1;

            if scanned == line {
                tracing::debug!(
                    "Read line {} of {} with {} import(s)",
                    line,
                    origin.display(),
                    imports.len()
                );
                return Ok(SourceLine { text, imports });
            }

            if let Some(import) = ImportStatement::parse_line(&text, &self.import_keyword) {
                imports.push(import);
            }
        }

        Err(out_of_range(scanned))
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `line` (1-based) of `path` and the imports above it.
pub fn read_line_and_imports(path: &Path, line: usize) -> Result<SourceLine> {
    LineExtractor::new().read_file(path, line)
}
