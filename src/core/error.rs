use std::path::PathBuf;
use thiserror::Error;

/// Discovery failures abort the whole build; everything below the root is
/// best-effort.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("root path {} is not a readable directory", .0.display())]
    RootNotADirectory(PathBuf),
}

/// Extraction failures are local to one file and never touch graph state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// An import marker was found but no closing quote exists before the end
    /// of the buffer. The scan stops at the buffer boundary instead of
    /// reading past it.
    #[error("import marker at byte {offset} has no closing quote")]
    UnterminatedImport { offset: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("cannot normalize an empty path")]
    EmptyPath,
}
