//! The record produced by the template engine.

use crate::StyleKey;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Presentation-ready text and style for one post.
///
/// A fresh record is produced on every generation. Regeneration never mutates
/// an existing record; [`GeneratedContent::with_caption`] returns a copy with
/// only the caption replaced.
///
/// # Examples
///
/// ```
/// use menugram_core::{GeneratedContent, StyleKey};
///
/// let content = GeneratedContent::new(
///     "Simple. Delicious.",
///     "Just tried the most amazing Truffle Arancini at Svang! 🤤",
///     vec!["#Svang".to_string()],
///     StyleKey::Minimal,
///     vec!["#FF6B6B".to_string()],
/// );
///
/// let edited = content.clone().with_caption("A new caption");
/// assert_eq!(edited.tagline(), content.tagline());
/// assert_eq!(edited.caption(), "A new caption");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
pub struct GeneratedContent {
    /// Short headline phrase
    tagline: String,

    /// Caption paragraph
    caption: String,

    /// Hashtags, each starting with `#`, unique, most relevant first
    hashtags: Vec<String>,

    /// Resolved style
    style: StyleKey,

    /// Brand color tokens copied from the request
    colors: Vec<String>,

    /// Follow-up story prompt, only produced by the menu pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    story_caption: Option<String>,
}

impl GeneratedContent {
    /// Creates a record without a story caption.
    pub fn new(
        tagline: impl Into<String>,
        caption: impl Into<String>,
        hashtags: Vec<String>,
        style: StyleKey,
        colors: Vec<String>,
    ) -> Self {
        Self {
            tagline: tagline.into(),
            caption: caption.into(),
            hashtags,
            style,
            colors,
            story_caption: None,
        }
    }
}
