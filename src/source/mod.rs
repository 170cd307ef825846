//! Line/import extraction from source files.
//!
//! Reads a file from the top up to a declaration's line, collecting the
//! `import` lines seen on the way. Nothing is cached; every lookup re-reads.

mod extract;

pub use extract::{LineExtractor, SourceLine, read_line_and_imports};
