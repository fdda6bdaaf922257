//! Hashtag derivation.

use menugram_core::{ContentRequest, Flow, PostType};
use std::collections::HashSet;

/// Tags appended after the derived ones on every post.
pub const GENERIC_POOL: &[&str] = &[
    "#Foodie",
    "#Delicious",
    "#Restaurant",
    "#Food",
    "#Yum",
    "#InstaFood",
    "#Foodstagram",
    "#EatLocal",
    "#FoodLovers",
    "#Culinary",
];

/// Tags specific to menu posts.
pub const MENU_POOL: &[&str] = &["#Menu", "#Dining", "#ChefSpecial", "#FineDining"];

/// Tags specific to customer-photo posts.
pub const USER_IMAGE_POOL: &[&str] = &["#CustomerPhoto", "#FoodPhoto", "#DiningOut", "#FoodShare"];

/// Trailing slots kept for post-type tags when the cap would cut them.
const POST_TYPE_SLOTS: usize = 2;

/// Slots the handle and name tags always keep ahead of any reservation.
const LEADING_SLOTS: usize = 2;

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `#` plus `text` with all whitespace removed, or `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use menugram_templates::word_tag;
///
/// assert_eq!(word_tag("Bella Vista").as_deref(), Some("#BellaVista"));
/// assert_eq!(word_tag("  "), None);
/// ```
pub fn word_tag(text: &str) -> Option<String> {
    let word = strip_whitespace(text);
    (!word.is_empty()).then(|| format!("#{word}"))
}

/// Hashtag for an account handle: one leading `@` removed, then as [`word_tag`].
///
/// # Examples
///
/// ```
/// use menugram_templates::handle_tag;
///
/// assert_eq!(handle_tag("@bellavista_nyc").as_deref(), Some("#bellavista_nyc"));
/// assert_eq!(handle_tag("@"), None);
/// ```
pub fn handle_tag(handle: &str) -> Option<String> {
    word_tag(handle.strip_prefix('@').unwrap_or(handle))
}

/// Caller-specific hashtag settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashtagProfile {
    /// Maximum number of hashtags returned
    pub cap: usize,
    /// Add a tag for the subject (featured item) after the name tag
    pub include_subject: bool,
    /// Add a tag for every menu item after the derived tags
    pub include_menu_items: bool,
}

impl HashtagProfile {
    /// Profile used by a flow, with that flow's default cap.
    pub fn for_flow(flow: Flow) -> Self {
        Self {
            cap: flow.default_hashtag_cap(),
            include_subject: flow == Flow::Item,
            include_menu_items: flow == Flow::Batch,
        }
    }

    /// Same profile with a different cap.
    pub fn with_cap(self, cap: usize) -> Self {
        Self { cap, ..self }
    }
}

#[derive(Default)]
struct TagList {
    tags: Vec<String>,
    seen: HashSet<String>,
}

impl TagList {
    fn contains(&self, tag: &str) -> bool {
        self.seen.contains(&tag.to_lowercase())
    }

    fn push(&mut self, tag: Option<String>) {
        if let Some(tag) = tag
            && self.seen.insert(tag.to_lowercase())
        {
            self.tags.push(tag);
        }
    }
}

/// Builds the ordered hashtag list for a request.
///
/// Order: handle tag, restaurant name tag, optional subject and menu item
/// tags, the generic pool, then the post-type pool. Empty derivations are
/// skipped and duplicates (compared case-insensitively) keep their first
/// position. When the cap would cut off the whole post-type pool, its first
/// two entries take the last slots instead, as long as the handle and name
/// tags still lead.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashtagGenerator;

impl HashtagGenerator {
    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }

    /// Tags for the request's post type beyond the generic pool.
    pub fn post_type_pool(&self, post_type: PostType) -> &'static [&'static str] {
        match post_type {
            PostType::Menu => MENU_POOL,
            PostType::UserImage => USER_IMAGE_POOL,
            PostType::Single => &[],
        }
    }

    /// Generate hashtags for a request under a caller profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use menugram_core::{ContentRequest, Flow, PostType};
    /// use menugram_templates::{HashtagGenerator, HashtagProfile};
    ///
    /// let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu);
    /// let tags = HashtagGenerator::new().generate(&request, &HashtagProfile::for_flow(Flow::Post));
    ///
    /// assert_eq!(
    ///     tags,
    ///     vec!["#bellavista_nyc", "#BellaVista", "#Foodie", "#Delicious",
    ///          "#Restaurant", "#Food", "#Menu", "#Dining"]
    /// );
    /// ```
    pub fn generate(&self, request: &ContentRequest, profile: &HashtagProfile) -> Vec<String> {
        let mut list = TagList::default();
        list.push(handle_tag(request.restaurant_handle()));
        list.push(word_tag(request.restaurant_name()));
        if profile.include_subject {
            list.push(word_tag(request.subject_name()));
        }
        if profile.include_menu_items {
            for item in request.menu_items() {
                list.push(word_tag(item.name()));
            }
        }
        for tag in GENERIC_POOL {
            list.push(Some((*tag).to_string()));
        }

        let specific: Vec<String> = self
            .post_type_pool(*request.post_type())
            .iter()
            .filter(|tag| !list.contains(tag))
            .map(|tag| (*tag).to_string())
            .collect();

        let mut tags = list.tags;
        if tags.len() + specific.len() <= profile.cap {
            tags.extend(specific);
            return tags;
        }

        let reserved = specific
            .len()
            .min(POST_TYPE_SLOTS)
            .min(profile.cap.saturating_sub(LEADING_SLOTS));
        tags.truncate(profile.cap - reserved);
        tags.extend(specific.into_iter().take(reserved));
        tags
    }
}
