//! Caller profiles that decide how content is packaged.

use serde::{Deserialize, Serialize};

/// The screen or pipeline requesting content.
///
/// Flows differ in hashtag cap, in which derived hashtags lead the list, and
/// in whether the caption carries its own trailing hashtag line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Flow {
    /// Restaurant post generator (menu, single or customer photo)
    #[default]
    Post,
    /// Single-item post, story and QR generators
    Item,
    /// Five-course menu pipeline
    Batch,
}

impl Flow {
    /// Hashtag cap used when no configuration overrides it.
    pub fn default_hashtag_cap(&self) -> usize {
        match self {
            Self::Post | Self::Batch => 8,
            Self::Item => 6,
        }
    }

    /// Whether the caption template embeds its own hashtag line.
    pub fn embeds_hashtags(&self) -> bool {
        matches!(self, Self::Batch)
    }
}
