use std::path::{Path, PathBuf};

/// Where a declaration can be read from.
///
/// Declarations compiled into a library artifact have no readable source and
/// report [`SourceLocation::Unavailable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    /// A source file and the 1-based line the declaration starts on
    File { path: PathBuf, line: usize },
    /// No source text is reachable for this declaration
    Unavailable,
}

impl SourceLocation {
    pub fn file(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::File {
            path: path.into(),
            line,
        }
    }

    /// The file path and line, if the declaration has source
    pub fn as_file(&self) -> Option<(&Path, usize)> {
        match self {
            Self::File { path, line } => Some((path.as_path(), *line)),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}
