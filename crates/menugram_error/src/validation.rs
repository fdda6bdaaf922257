//! Missing-input validation errors.
//!
//! These are raised by callers before the template engine is invoked. The
//! engine itself accepts any input.

/// Required input that was absent when generation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Restaurant name is empty
    #[display("Please fill in restaurant name and handle")]
    MissingRestaurantName,
    /// Restaurant handle is empty
    #[display("Please fill in restaurant name and handle")]
    MissingRestaurantHandle,
    /// Menu item name is empty
    #[display("Please fill in the menu item name and description")]
    MissingItemName,
    /// Menu item description is empty
    #[display("Please fill in the menu item name and description")]
    MissingItemDescription,
    /// A menu post was requested without any menu items
    #[display("Please add at least one menu item")]
    EmptyMenu,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use menugram_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyMenu);
/// assert_eq!(err.notice(), "Missing Information: Please add at least one menu item");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The missing input
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing notice, as shown by the form screens.
    pub fn notice(&self) -> String {
        format!("Missing Information: {}", self.kind)
    }
}
