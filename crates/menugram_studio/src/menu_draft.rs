//! The five-course menu being assembled by an operator.

use derive_getters::Getters;
use menugram_core::{ContentRequest, Course, MenuItem, PostType};
use menugram_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of courses a complete tasting menu has.
pub const COURSE_TARGET: usize = 5;

/// Item count from which the builder advertises the menu as ready for content.
pub const SUGGESTED_MINIMUM: usize = 3;

/// One course entry in a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DraftEntry {
    /// Course slot
    course: Course,
    /// Dish details
    item: MenuItem,
}

/// An ordered list of course entries.
///
/// # Examples
///
/// ```
/// use menugram_core::Course;
/// use menugram_studio::MenuDraft;
///
/// let mut draft = MenuDraft::new();
/// assert!(!draft.is_ready());
///
/// draft.add(Course::Appetizer, "Truffle Arancini", "Aged parmesan", "$24").unwrap();
/// assert!(draft.add(Course::Soup, "Bisque", " ", "").is_err());
/// assert!(draft.is_ready());
/// assert_eq!(draft.progress(), "1/5 courses added");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDraft {
    entries: Vec<DraftEntry>,
}

impl MenuDraft {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course.
    ///
    /// A blank price is stored as no price.
    ///
    /// # Errors
    ///
    /// Rejects entries with a blank name or description; the draft is left
    /// unchanged.
    pub fn add(
        &mut self,
        course: Course,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingItemName));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingItemDescription,
            ));
        }
        let price = price.into();
        let price = (!price.trim().is_empty()).then_some(price);

        debug!(%course, %name, "Added course to menu draft");
        self.entries.push(DraftEntry {
            course,
            item: MenuItem::new(name, description).with_price(price),
        });
        Ok(())
    }

    /// Remove and return the entry at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<DraftEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[DraftEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the draft has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Content can be generated once at least one course exists.
    pub fn is_ready(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Whether enough courses exist to advertise the menu as ready.
    pub fn meets_suggested_minimum(&self) -> bool {
        self.entries.len() >= SUGGESTED_MINIMUM
    }

    /// Progress line such as `3/5 courses added`.
    pub fn progress(&self) -> String {
        format!("{}/{} courses added", self.entries.len(), COURSE_TARGET)
    }

    /// A `menu` request carrying every course, in order.
    pub fn to_request(
        &self,
        restaurant_name: impl Into<String>,
        restaurant_handle: impl Into<String>,
        style: impl Into<String>,
        brand_colors: Vec<String>,
    ) -> ContentRequest {
        ContentRequest::new(restaurant_name, restaurant_handle, PostType::Menu)
            .with_menu_items(
                self.entries
                    .iter()
                    .map(|entry| entry.item.clone())
                    .collect::<Vec<_>>(),
            )
            .with_style(style)
            .with_brand_colors(brand_colors)
    }
}
