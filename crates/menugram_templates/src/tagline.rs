//! Tagline templates.

use menugram_core::{PostType, StyleKey};

use crate::render::{TemplateVars, render};
use crate::sampler::{Sampler, choose};

const MINIMAL: &[&str] = &["{{subject}}", "Simple. Delicious.", "Taste the difference"];
const ELEGANT: &[&str] = &[
    "Exquisite {{subject}}",
    "Culinary perfection",
    "A masterpiece on your plate",
];
const BOLD: &[&str] = &[
    "🔥 {{subject}} 🔥",
    "Bold flavors await!",
    "This will blow your mind!",
];
const PLAYFUL: &[&str] = &[
    "✨ {{subject}} magic ✨",
    "Yum alert! 🚨",
    "Foodie heaven incoming!",
];

const MENU: &[&str] = &[
    "🍽️ Our signature dishes await you!",
    "✨ Tonight's featured menu ✨",
    "🔥 Must-try dishes at {{subject}} 🔥",
    "🌟 Discover our culinary treasures 🌟",
];

const USER_IMAGE: &[&str] = &[
    "📸 Amazing food at {{subject}}!",
    "🤤 This looks incredible!",
    "✨ Thanks for sharing! ✨",
    "🍴 Delicious moments captured 🍴",
];

/// Picks a short headline phrase.
///
/// Single-item taglines are keyed by style (unknown styles use the elegant
/// list) and interpolate the item name. Menu and customer-photo taglines have
/// one list each and interpolate the restaurant name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaglineGenerator;

impl TaglineGenerator {
    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }

    /// Raw candidate templates for a post type and style.
    pub fn candidates(&self, style: &str, post_type: PostType) -> &'static [&'static str] {
        match post_type {
            PostType::Menu => MENU,
            PostType::UserImage => USER_IMAGE,
            PostType::Single => match StyleKey::parse_or_default(style) {
                StyleKey::Minimal => MINIMAL,
                StyleKey::Elegant => ELEGANT,
                StyleKey::Bold => BOLD,
                StyleKey::Playful => PLAYFUL,
            },
        }
    }

    /// Every tagline `generate` could return for these inputs.
    pub fn rendered_candidates(
        &self,
        subject_name: &str,
        style: &str,
        post_type: PostType,
    ) -> Vec<String> {
        let vars = TemplateVars::for_subject(subject_name);
        self.candidates(style, post_type)
            .iter()
            .map(|template| render(template, &vars))
            .collect()
    }

    /// Pick a tagline for `subject_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use menugram_core::PostType;
    /// use menugram_templates::{SequenceSampler, TaglineGenerator};
    ///
    /// let generator = TaglineGenerator::new();
    /// let mut sampler = SequenceSampler::new(vec![0]);
    /// let tagline = generator.generate("Truffle Arancini", "bold", PostType::Single, &mut sampler);
    /// assert_eq!(tagline, "🔥 Truffle Arancini 🔥");
    /// ```
    pub fn generate<S: Sampler + ?Sized>(
        &self,
        subject_name: &str,
        style: &str,
        post_type: PostType,
        sampler: &mut S,
    ) -> String {
        let template = choose(sampler, self.candidates(style, post_type));
        render(template, &TemplateVars::for_subject(subject_name))
    }
}
