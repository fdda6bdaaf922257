//! Caller-side precondition checks.
//!
//! The template engine accepts any input. These checks run before it is
//! invoked and block generation with a user-facing notice.

use crate::{ContentRequest, Flow, PostType};
use menugram_error::{ValidationError, ValidationErrorKind};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check that a request carries the input its flow requires.
///
/// - `Post`: a menu post needs at least one item; restaurant name and handle
///   are always required.
/// - `Item`: the featured item needs a name and a description.
/// - `Batch`: at least one menu item and a restaurant name.
///
/// # Errors
///
/// Returns the first missing input found, in the order listed above.
///
/// # Examples
///
/// ```
/// use menugram_core::{ContentRequest, Flow, PostType, validate_request};
/// use menugram_error::ValidationErrorKind;
///
/// let request = ContentRequest::new("Bella Vista", "", PostType::UserImage);
/// let err = validate_request(&request, Flow::Post).unwrap_err();
/// assert_eq!(err.kind, ValidationErrorKind::MissingRestaurantHandle);
/// ```
pub fn validate_request(request: &ContentRequest, flow: Flow) -> Result<(), ValidationError> {
    match flow {
        Flow::Post => {
            if *request.post_type() == PostType::Menu && request.menu_items().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyMenu));
            }
            if is_blank(request.restaurant_name()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingRestaurantName,
                ));
            }
            if is_blank(request.restaurant_handle()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingRestaurantHandle,
                ));
            }
        }
        Flow::Item => {
            let item = request
                .featured_item()
                .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingItemName))?;
            if is_blank(item.name()) {
                return Err(ValidationError::new(ValidationErrorKind::MissingItemName));
            }
            if is_blank(item.description()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingItemDescription,
                ));
            }
        }
        Flow::Batch => {
            if request.menu_items().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyMenu));
            }
            if is_blank(request.restaurant_name()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingRestaurantName,
                ));
            }
        }
    }
    Ok(())
}
