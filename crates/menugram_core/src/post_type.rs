//! Post type enumeration.

use serde::{Deserialize, Serialize};

/// Kind of post being generated.
///
/// Selects the caption, tagline and hashtag template families as well as the
/// preview layout.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PostType {
    /// Several menu items in one post
    #[default]
    Menu,
    /// A single featured item
    Single,
    /// A customer-submitted photo
    UserImage,
}
