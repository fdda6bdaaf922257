//! Errors raised while exporting generated content as JSON.

/// Generated content that `serde_json` refused to serialize.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Serializer message, prefixed with what was being exported
    pub message: String,
    /// Line of the failed export call
    pub line: u32,
    /// Source file of the failed export call
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a serializer failure for a content export.
    ///
    /// # Examples
    ///
    /// ```
    /// use menugram_error::JsonError;
    ///
    /// let err = JsonError::new("Failed to serialize content: key must be a string");
    /// assert!(err.to_string().starts_with("JSON Error: Failed to serialize content"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
