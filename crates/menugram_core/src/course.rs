//! Courses of the five-course menu builder.

use serde::{Deserialize, Serialize};

/// One of the five courses a tasting menu is assembled from.
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
pub enum Course {
    /// Opening course
    #[default]
    Appetizer,
    /// Soup course
    Soup,
    /// Main course
    Main,
    /// Dessert course
    Dessert,
    /// Drinks
    Beverage,
}

impl Course {
    /// Name shown on course badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::Soup => "Soup",
            Self::Main => "Main Course",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
        }
    }

    /// Sample description offered when the operator asks for a suggestion.
    pub fn suggested_description(&self) -> &'static str {
        match self {
            Self::Appetizer => "Delicate truffle arancini with aged parmesan and micro herbs",
            Self::Soup => "Rich butternut squash bisque with roasted chestnuts and sage",
            Self::Main => "Pan-seared duck breast with cherry gastrique and seasonal vegetables",
            Self::Dessert => "Decadent chocolate soufflé with vanilla bean ice cream",
            Self::Beverage => "House-crafted sangria with seasonal fruits and premium spirits",
        }
    }
}
