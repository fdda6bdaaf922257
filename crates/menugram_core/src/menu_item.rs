//! Menu item record.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A dish or drink entered by the operator or resolved from a QR code.
///
/// # Examples
///
/// ```
/// use menugram_core::MenuItem;
///
/// let item = MenuItem::new("Truffle Arancini", "Delicate truffle arancini")
///     .with_price(Some("$24.00".to_string()));
/// assert_eq!(item.name(), "Truffle Arancini");
/// assert_eq!(item.price().as_deref(), Some("$24.00"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct MenuItem {
    /// Item name
    name: String,

    /// Free-text description
    #[builder(default)]
    #[serde(default)]
    description: String,

    /// Display price, kept as entered (e.g. `$24.00`)
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<String>,

    /// Image URI
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl MenuItem {
    /// Creates an item with no price or image.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: None,
            image: None,
        }
    }

    /// Creates a new menu item builder.
    pub fn builder() -> MenuItemBuilder {
        MenuItemBuilder::default()
    }
}
