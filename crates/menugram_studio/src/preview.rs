//! Text mockups of the post and story a request would produce.
//!
//! Previews take the hashtags as already capped and ordered and only show a
//! prefix of them.

use derive_getters::Getters;
use menugram_core::{ContentRequest, GeneratedContent, PostType, StyleAttributes};
use menugram_templates::StyleRegistry;
use std::fmt;

use crate::PreviewConfig;

/// Display name used when the restaurant name is blank.
pub const FALLBACK_NAME: &str = "Restaurant";

/// Location line used when the location is blank.
pub const FALLBACK_LOCATION: &str = "Location";

/// Avatar initial used when the restaurant name is blank.
pub const FALLBACK_INITIAL: char = 'R';

/// Shorten `text` to `limit` characters plus `...` when it is longer.
///
/// # Examples
///
/// ```
/// use menugram_studio::truncate_description;
///
/// assert_eq!(truncate_description("Crispy", 60), "Crispy");
/// assert_eq!(truncate_description("Crispy risotto", 6), "Crispy...");
/// ```
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut short: String = text.chars().take(limit).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

/// Header shared by both mockups.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AccountHeader {
    /// Restaurant name or [`FALLBACK_NAME`]
    display_name: String,
    /// First character of the name or [`FALLBACK_INITIAL`]
    avatar_initial: char,
    /// Location or [`FALLBACK_LOCATION`]
    location: String,
}

impl AccountHeader {
    /// Header for a request, applying the blank-field fallbacks.
    pub fn from_request(request: &ContentRequest) -> Self {
        let name = request.restaurant_name().trim();
        let location = request.location().trim();
        Self {
            display_name: if name.is_empty() { FALLBACK_NAME } else { name }.to_string(),
            avatar_initial: name.chars().next().unwrap_or(FALLBACK_INITIAL),
            location: if location.is_empty() {
                FALLBACK_LOCATION
            } else {
                location
            }
            .to_string(),
        }
    }
}

impl fmt::Display for AccountHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}) {}", self.avatar_initial, self.display_name)?;
        write!(f, "    {}", self.location)
    }
}

/// The dish (or restaurant) a mockup features.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FeaturedItem {
    /// Item name, or the restaurant for menu and customer-photo posts
    title: String,
    /// Truncated description
    description: String,
    /// Display price
    price: Option<String>,
    /// Image reference
    image: Option<String>,
}

impl FeaturedItem {
    fn from_request(request: &ContentRequest, description_limit: usize) -> Self {
        let item = request.featured_item();
        let image = match request.post_type() {
            PostType::UserImage => request.user_image().clone(),
            PostType::Menu | PostType::Single => None,
        }
        .or_else(|| item.and_then(|item| item.image().clone()));
        Self {
            title: request.subject_name().to_string(),
            description: item
                .map(|item| truncate_description(item.description(), description_limit))
                .unwrap_or_default(),
            price: item.and_then(|item| item.price().clone()),
            image,
        }
    }
}

/// Feed post mockup.
///
/// # Examples
///
/// ```
/// use menugram_core::{ContentRequest, GeneratedContent, PostType, StyleKey};
/// use menugram_studio::{PostPreview, PreviewConfig};
///
/// let request = ContentRequest::new("", "", PostType::Menu);
/// let content = GeneratedContent::new(
///     "Culinary perfection",
///     "Come hungry.",
///     vec!["#a".into(), "#b".into(), "#c".into(), "#d".into(), "#e".into()],
///     StyleKey::Elegant,
///     vec![],
/// );
///
/// let preview = PostPreview::new(&request, &content, &PreviewConfig::default());
/// assert_eq!(preview.header().display_name(), "Restaurant");
/// assert_eq!(preview.hashtags().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PostPreview {
    /// Account header
    header: AccountHeader,
    /// Image overlay content
    featured: FeaturedItem,
    /// Headline
    tagline: String,
    /// Caption shown after the account name
    caption: String,
    /// Leading hashtags
    hashtags: Vec<String>,
    /// Resolved presentation attributes
    style: StyleAttributes,
    /// Brand colors
    colors: Vec<String>,
}

impl PostPreview {
    /// Lay out a post for generated content.
    pub fn new(request: &ContentRequest, content: &GeneratedContent, config: &PreviewConfig) -> Self {
        Self {
            header: AccountHeader::from_request(request),
            featured: FeaturedItem::from_request(request, config.description_limit),
            tagline: content.tagline().clone(),
            caption: content.caption().clone(),
            hashtags: content
                .hashtags()
                .iter()
                .take(config.post_hashtags)
                .cloned()
                .collect(),
            style: StyleRegistry::new().attributes(*content.style()),
            colors: content.colors().clone(),
        }
    }
}

impl fmt::Display for PostPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "[{}]", self.featured.image.as_deref().unwrap_or("no image"))?;
        writeln!(f, "{}", self.featured.title)?;
        if !self.featured.description.is_empty() {
            writeln!(f, "{}", self.featured.description)?;
        }
        if let Some(price) = &self.featured.price {
            writeln!(f, "{price}")?;
        }
        writeln!(f, "{}", self.tagline)?;
        writeln!(f)?;
        writeln!(f, "{} {}", self.header.display_name, self.caption)?;
        writeln!(f, "{}", self.hashtags.join(" "))?;
        write!(
            f,
            "style: {} ({} on {} to {})",
            self.style.key(),
            self.style.text_color(),
            self.style.background_gradient().0,
            self.style.background_gradient().1
        )
    }
}

/// Vertical story mockup.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StoryPreview {
    /// Account header
    header: AccountHeader,
    /// Centered item card
    featured: FeaturedItem,
    /// Headline under the price
    tagline: String,
    /// Story prompt from the menu pipeline, if any
    story_caption: Option<String>,
    /// Leading hashtags
    hashtags: Vec<String>,
    /// Resolved presentation attributes
    style: StyleAttributes,
}

impl StoryPreview {
    /// Lay out a story for generated content.
    pub fn new(request: &ContentRequest, content: &GeneratedContent, config: &PreviewConfig) -> Self {
        Self {
            header: AccountHeader::from_request(request),
            featured: FeaturedItem::from_request(request, config.story_description_limit),
            tagline: content.tagline().clone(),
            story_caption: content.story_caption().clone(),
            hashtags: content
                .hashtags()
                .iter()
                .take(config.story_hashtags)
                .cloned()
                .collect(),
            style: StyleRegistry::new().attributes(*content.style()),
        }
    }
}

impl fmt::Display for StoryPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}    now", self.header)?;
        writeln!(f)?;
        writeln!(f, "  [{}]", self.featured.image.as_deref().unwrap_or("no image"))?;
        writeln!(f, "  {}", self.featured.title)?;
        if !self.featured.description.is_empty() {
            writeln!(f, "  {}", self.featured.description)?;
        }
        if let Some(price) = &self.featured.price {
            writeln!(f, "  ( {price} )")?;
        }
        writeln!(f, "  {}", self.tagline)?;
        if let Some(story) = &self.story_caption {
            writeln!(f, "  {story}")?;
        }
        writeln!(f)?;
        write!(f, "  {}", self.hashtags.join("  "))
    }
}
