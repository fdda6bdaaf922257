//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, ExportError, JsonError, SessionError, ValidationError};

/// Every error condition the Menugram crates can report.
///
/// # Examples
///
/// ```
/// use menugram_error::{MenugramError, ConfigError};
///
/// let err: MenugramError = ConfigError::new("bad style").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MenugramErrorKind {
    /// Required form input missing
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// QR catalog lookup error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// File export error
    #[from(ExportError)]
    Export(ExportError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generation session error
    #[from(SessionError)]
    Session(SessionError),
}

/// Menugram error with kind discrimination.
///
/// # Examples
///
/// ```
/// use menugram_error::{MenugramResult, ValidationError, ValidationErrorKind, MenugramErrorKind};
///
/// fn might_fail() -> MenugramResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::MissingItemName))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), MenugramErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Menugram Error: {}", _0)]
pub struct MenugramError(Box<MenugramErrorKind>);

impl MenugramError {
    /// Create a new error from a kind.
    pub fn new(kind: MenugramErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MenugramErrorKind {
        &self.0
    }

    /// The validation failure wrapped by this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.kind() {
            MenugramErrorKind::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to MenugramErrorKind
impl<T> From<T> for MenugramError
where
    T: Into<MenugramErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Menugram operations.
pub type MenugramResult<T> = std::result::Result<T, MenugramError>;
