//! Export error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Failed to create the output directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the export file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
