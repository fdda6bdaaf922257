//! QR catalog lookup errors.

/// Specific error conditions for menu catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// No catalog item has the requested identifier
    #[display("Menu item '{}' not found", _0)]
    ItemNotFound(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use menugram_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::ItemNotFound("42".to_string()));
/// assert!(format!("{}", err).contains("'42' not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The specific error condition
    pub kind: CatalogErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with caller location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
