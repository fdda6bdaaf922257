//! The structured input handed to the template engine.

use crate::{MenuItem, PostType};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the template engine needs to produce one post.
///
/// The request is a plain value: it is built from form state, passed to the
/// engine, and owns no references back into the caller.
///
/// `style` is kept as free text; resolution (with its fallback) is the
/// registry's job.
///
/// # Examples
///
/// ```
/// use menugram_core::{ContentRequest, MenuItem, PostType};
///
/// let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
///     .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Aged parmesan")])
///     .with_style("bold");
///
/// assert_eq!(request.restaurant_name(), "Bella Vista");
/// assert_eq!(request.subject_name(), "Bella Vista");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_", into)]
#[builder(setter(into))]
pub struct ContentRequest {
    /// Restaurant display name
    #[builder(default)]
    #[serde(default)]
    restaurant_name: String,

    /// Instagram handle, optionally with a leading `@`
    #[builder(default)]
    #[serde(default)]
    restaurant_handle: String,

    /// Location line shown under the account name in previews
    #[builder(default)]
    #[serde(default)]
    location: String,

    /// Kind of post
    #[builder(default)]
    #[serde(default)]
    post_type: PostType,

    /// Items featured in the post, in display order
    #[builder(default)]
    #[serde(default)]
    menu_items: Vec<MenuItem>,

    /// Requested style key (free text)
    #[builder(default = "String::from(\"elegant\")")]
    #[serde(default = "default_style")]
    style: String,

    /// Brand color tokens, in order
    #[builder(default)]
    #[serde(default)]
    brand_colors: Vec<String>,

    /// Customer photo for `user-image` posts
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_image: Option<String>,
}

fn default_style() -> String {
    "elegant".to_string()
}

impl ContentRequest {
    /// Creates a request with the elegant style and no items or colors.
    pub fn new(
        restaurant_name: impl Into<String>,
        restaurant_handle: impl Into<String>,
        post_type: PostType,
    ) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            restaurant_handle: restaurant_handle.into(),
            location: String::new(),
            post_type,
            menu_items: Vec::new(),
            style: default_style(),
            brand_colors: Vec::new(),
            user_image: None,
        }
    }

    /// Creates a new content request builder.
    pub fn builder() -> ContentRequestBuilder {
        ContentRequestBuilder::default()
    }

    /// The featured item, if any.
    pub fn featured_item(&self) -> Option<&MenuItem> {
        self.menu_items.first()
    }

    /// Name that taglines and captions are written about.
    ///
    /// Single-item posts talk about the featured item, falling back to the
    /// restaurant when no item is present. Menu and customer-photo posts talk
    /// about the restaurant.
    pub fn subject_name(&self) -> &str {
        match self.post_type {
            PostType::Single => self
                .featured_item()
                .map(|item| item.name().as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(self.restaurant_name.as_str()),
            PostType::Menu | PostType::UserImage => &self.restaurant_name,
        }
    }
}

/// Split a comma-separated brand color field into tokens.
///
/// Whitespace around each token is trimmed and empty tokens are dropped.
///
/// # Examples
///
/// ```
/// use menugram_core::parse_brand_colors;
///
/// assert_eq!(parse_brand_colors("#FF6B6B, #4ECDC4"), vec!["#FF6B6B", "#4ECDC4"]);
/// assert!(parse_brand_colors(" , ").is_empty());
/// ```
pub fn parse_brand_colors(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
