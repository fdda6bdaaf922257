//! Caption templates.
//!
//! Two caption shapes exist side by side. Post and item flows produce a
//! standalone caption and leave hashtags to the caller. The menu pipeline
//! produces a caption whose template ends in its own hashtag line.

use menugram_core::{ContentRequest, Flow, PostType};

use crate::render::{TemplateVars, render};
use crate::sampler::{Sampler, choose};

const MENU: &[&str] = &[
    "Experience the best of {{restaurant}}! Our carefully crafted menu features the finest ingredients and traditional techniques. From appetizers to desserts, every dish tells a story of passion and flavor. 🍽️✨",
    "Ready to embark on a culinary journey? Our menu showcases the perfect blend of innovation and tradition. Each dish is prepared with love and attention to detail. Book your table today! 📞🍴",
    "Discover why {{restaurant}} is the talk of the town! Our menu features signature dishes that will transport your taste buds to new heights. Don't miss out on these incredible flavors! 🌟👨‍🍳",
];

const ITEM: &[&str] = &[
    "Just tried the most amazing {{subject}} at {{restaurant}}! 🤤",
    "This {{subject}} is absolutely incredible! {{restaurant}} never disappoints ✨",
    "Foodie alert! The {{subject}} at {{restaurant}} is a must-try! 🍽️",
    "Can't stop thinking about this {{subject}} from {{restaurant}}! 😍",
];

const USER_IMAGE: &[&str] = &[
    "Thank you for sharing this beautiful moment with us! We're thrilled to see our food bringing joy to your dining experience. Tag us in your posts! 📸✨",
    "Nothing makes us happier than seeing our customers enjoy our food! Thanks for the amazing photo and for choosing {{restaurant}}. Keep the foodie moments coming! 🍽️❤️",
    "This photo perfectly captures the essence of great food and good times! We're so grateful for customers like you who share their dining experiences. Can't wait to serve you again! 🥰👨‍🍳",
];

const BATCH: &[&str] = &[
    "🍽️ Experience our exquisite {{course_count}}-course tasting menu at {{restaurant}}!\n\nFrom our delicate {{first_item}} to our decadent {{last_item}}, each course is crafted with passion and the finest ingredients.\n\n✨ Tonight's featured courses showcase the best of Italian fine dining with a modern twist. Book your table and embark on a culinary journey that will awaken your senses.\n\n{{restaurant_tag}} #ItalianCuisine #FoodieExperience",
    "🌟 Indulge in culinary excellence at {{restaurant}}!\n\nOur carefully curated {{course_count}}-course menu takes you on a gastronomic adventure from {{first_item}} to {{last_item}}, through authentic Italian flavors with contemporary flair.\n\n👨‍🍳 Each dish tells a story, from farm-fresh ingredients to time-honored techniques passed down through generations.\n\nReservations available - don't miss this extraordinary dining experience!\n\n{{restaurant_tag}} #TastingMenu #CulinaryExcellence",
];

const STORY: &[&str] = &[
    "🔥 Tonight's {{course_count}}-course journey awaits! Which course are you most excited to try? Comment below! 👇✨",
    "✨ Behind the scenes: Our chef preparing tonight's signature dishes! What's your favorite Italian dish? 🍝❤️",
];

/// Which caption template family a flow draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionShape {
    /// Caption text only; hashtags are generated and shown separately
    Standalone,
    /// Caption template ending in a fixed hashtag line
    WithHashtagLine,
}

impl From<Flow> for CaptionShape {
    fn from(flow: Flow) -> Self {
        if flow.embeds_hashtags() {
            Self::WithHashtagLine
        } else {
            Self::Standalone
        }
    }
}

/// Drop empty tokens from the trailing hashtag line.
fn finish(shape: CaptionShape, caption: String) -> String {
    if shape != CaptionShape::WithHashtagLine {
        return caption;
    }
    match caption.rsplit_once('\n') {
        Some((body, line)) => {
            let tags: Vec<&str> = line.split_whitespace().collect();
            format!("{body}\n{}", tags.join(" "))
        }
        None => caption,
    }
}

/// Picks caption paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionGenerator;

impl CaptionGenerator {
    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }

    /// Raw candidate templates for a shape and post type.
    ///
    /// The hashtag-line shape has a single family regardless of post type.
    pub fn candidates(&self, shape: CaptionShape, post_type: PostType) -> &'static [&'static str] {
        match shape {
            CaptionShape::WithHashtagLine => BATCH,
            CaptionShape::Standalone => match post_type {
                PostType::Menu => MENU,
                PostType::Single => ITEM,
                PostType::UserImage => USER_IMAGE,
            },
        }
    }

    /// Every caption `generate` could return for this request and shape.
    pub fn rendered_candidates(&self, request: &ContentRequest, shape: CaptionShape) -> Vec<String> {
        let vars = TemplateVars::from_request(request);
        self.candidates(shape, *request.post_type())
            .iter()
            .map(|template| finish(shape, render(template, &vars)))
            .collect()
    }

    /// Pick a standalone caption for the request's post type.
    ///
    /// # Examples
    ///
    /// ```
    /// use menugram_core::{ContentRequest, MenuItem, PostType};
    /// use menugram_templates::{CaptionGenerator, SequenceSampler};
    ///
    /// let request = ContentRequest::new("Svang", "", PostType::Single)
    ///     .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Aged parmesan")]);
    /// let mut sampler = SequenceSampler::new(vec![0]);
    ///
    /// let caption = CaptionGenerator::new().generate(&request, &mut sampler);
    /// assert_eq!(caption, "Just tried the most amazing Truffle Arancini at Svang! 🤤");
    /// ```
    pub fn generate<S: Sampler + ?Sized>(&self, request: &ContentRequest, sampler: &mut S) -> String {
        self.generate_shaped(request, CaptionShape::Standalone, sampler)
    }

    /// Pick a caption that carries its own trailing hashtag line.
    pub fn generate_with_hashtag_line<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        sampler: &mut S,
    ) -> String {
        self.generate_shaped(request, CaptionShape::WithHashtagLine, sampler)
    }

    /// Pick a caption of the given shape.
    pub fn generate_shaped<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        shape: CaptionShape,
        sampler: &mut S,
    ) -> String {
        let template = choose(sampler, self.candidates(shape, *request.post_type()));
        finish(shape, render(template, &TemplateVars::from_request(request)))
    }

    /// Story prompts that accompany a menu pipeline post.
    pub fn story_candidates(&self) -> &'static [&'static str] {
        STORY
    }

    /// Pick a story prompt.
    pub fn story_caption<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        sampler: &mut S,
    ) -> String {
        render(choose(sampler, STORY), &TemplateVars::from_request(request))
    }
}
