//! Visual style keys and the attribute bundle each one resolves to.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of visual styles a post can be rendered in.
///
/// Parsing is case-sensitive; anything unrecognized falls back to
/// [`StyleKey::Elegant`] through [`StyleKey::parse_or_default`].
///
/// # Examples
///
/// ```
/// use menugram_core::StyleKey;
///
/// assert_eq!(StyleKey::parse_or_default("bold"), StyleKey::Bold);
/// assert_eq!(StyleKey::parse_or_default("Bold"), StyleKey::Elegant);
/// assert_eq!(StyleKey::Playful.to_string(), "playful");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StyleKey {
    /// Clean and simple design
    Minimal,
    /// Sophisticated and refined
    #[default]
    Elegant,
    /// Vibrant and eye-catching
    Bold,
    /// Fun and energetic
    Playful,
}

impl StyleKey {
    /// Parse a style key, falling back to `Elegant` for unknown input.
    pub fn parse_or_default(key: &str) -> Self {
        Self::from_str(key).unwrap_or_default()
    }

    /// Human-readable name shown in style pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Elegant => "Elegant",
            Self::Bold => "Bold",
            Self::Playful => "Playful",
        }
    }

    /// One-line description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Minimal => "Clean and simple design",
            Self::Elegant => "Sophisticated and refined",
            Self::Bold => "Vibrant and eye-catching",
            Self::Playful => "Fun and energetic",
        }
    }
}

/// Presentation attributes consumed by preview renderers.
///
/// Values are color tokens (utility-class color names such as `gray-900` or
/// `white/20`), not rendered CSS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct StyleAttributes {
    /// Style this bundle belongs to
    key: StyleKey,
    /// Gradient start and end
    background_gradient: (String, String),
    /// Primary text color
    text_color: String,
    /// Secondary text color (location line, accents)
    accent_color: String,
    /// Card overlay background
    card_background: String,
    /// Background behind images and the avatar
    image_background: String,
}

impl StyleAttributes {
    /// Creates a new attribute bundle.
    pub fn new(
        key: StyleKey,
        background_gradient: (&str, &str),
        text_color: &str,
        accent_color: &str,
        card_background: &str,
        image_background: &str,
    ) -> Self {
        Self {
            key,
            background_gradient: (
                background_gradient.0.to_string(),
                background_gradient.1.to_string(),
            ),
            text_color: text_color.to_string(),
            accent_color: accent_color.to_string(),
            card_background: card_background.to_string(),
            image_background: image_background.to_string(),
        }
    }
}
