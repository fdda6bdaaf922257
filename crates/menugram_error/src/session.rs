//! Generation session errors.

/// Specific error conditions for the generation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Caption regeneration requested before any content was generated
    #[display("No generated content to regenerate")]
    NothingToRegenerate,
    /// The pending generation was cancelled before producing content
    #[display("Generation cancelled")]
    Cancelled,
    /// The session was dropped while a caller was waiting on it
    #[display("Generation session closed")]
    Closed,
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
