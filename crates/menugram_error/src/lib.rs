//! Error types for the Menugram content generator.
//!
//! This crate provides the error types used throughout the Menugram workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The template engine itself never fails. Errors only arise around it: missing
//! form input, configuration, QR catalog lookups, file export and the
//! generation session.
//!
//! # Examples
//!
//! ```
//! use menugram_error::{MenugramResult, ValidationError, ValidationErrorKind};
//!
//! fn check(name: &str) -> MenugramResult<()> {
//!     if name.is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::MissingRestaurantName))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("Bella Vista").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod export;
mod json;
mod session;
mod validation;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{MenugramError, MenugramErrorKind, MenugramResult};
pub use export::{ExportError, ExportErrorKind};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
