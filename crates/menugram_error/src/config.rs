//! Errors raised while loading `menugram.toml` layers.

/// A studio setting that could not be read or failed its range check.
///
/// Carries the call site so a bad cap or limit can be traced back to the
/// check that rejected it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Which setting was rejected and why
    pub message: String,
    /// Line of the rejecting check
    pub line: u32,
    /// Source file of the rejecting check
    pub file: &'static str,
}

impl ConfigError {
    /// Reject a setting, recording the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use menugram_error::ConfigError;
    ///
    /// let err = ConfigError::new("hashtags.post_cap must be greater than zero");
    /// assert!(err.message.contains("post_cap"));
    /// assert!(err.file.ends_with(".rs"));
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
