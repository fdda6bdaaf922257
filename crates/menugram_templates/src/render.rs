//! Placeholder substitution for template strings.
//!
//! Templates use `{{name}}` placeholders. Unknown placeholders are left
//! untouched; the engine has no failure path. Substitution is a single pass
//! over the template, so braces inside inserted values stay literal.

use derive_getters::Getters;
use menugram_core::ContentRequest;

use crate::hashtag::word_tag;

/// Values available to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct TemplateVars {
    /// Item or restaurant the copy is about
    subject: String,
    /// Restaurant display name
    restaurant: String,
    /// Restaurant hashtag, empty when the name has no letters to tag
    restaurant_tag: String,
    /// First menu item name
    first_item: String,
    /// Last menu item name
    last_item: String,
    /// Number of menu items
    course_count: usize,
}

impl TemplateVars {
    /// Collect template values from a request.
    pub fn from_request(request: &ContentRequest) -> Self {
        let items = request.menu_items();
        Self {
            subject: request.subject_name().to_string(),
            restaurant: request.restaurant_name().clone(),
            restaurant_tag: word_tag(request.restaurant_name()).unwrap_or_default(),
            first_item: items
                .first()
                .map(|item| item.name().clone())
                .unwrap_or_default(),
            last_item: items
                .last()
                .map(|item| item.name().clone())
                .unwrap_or_default(),
            course_count: items.len(),
        }
    }

    /// Values for a bare subject with no request behind it.
    pub fn for_subject(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            ..Self::default()
        }
    }

    fn value(&self, name: &str) -> Option<String> {
        let value = match name {
            "subject" => self.subject.clone(),
            "restaurant" => self.restaurant.clone(),
            "restaurant_tag" => self.restaurant_tag.clone(),
            "first_item" => self.first_item.clone(),
            "last_item" => self.last_item.clone(),
            "course_count" => self.course_count.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

/// Substitute `{{name}}` placeholders in `template`.
///
/// # Examples
///
/// ```
/// use menugram_templates::{TemplateVars, render};
///
/// let vars = TemplateVars::for_subject("Truffle Arancini");
/// assert_eq!(render("🔥 {{subject}} 🔥", &vars), "🔥 Truffle Arancini 🔥");
/// assert_eq!(render("{{unknown}}", &vars), "{{unknown}}");
///
/// let vars = TemplateVars::for_subject("{{subject}} Special");
/// assert_eq!(render("{{subject}}!", &vars), "{{subject}} Special!");
/// ```
pub fn render(template: &str, vars: &TemplateVars) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        text.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let value = after
            .find("}}")
            .and_then(|close| vars.value(&after[..close]).map(|value| (close, value)));
        match value {
            Some((close, value)) => {
                text.push_str(&value);
                rest = &after[close + 2..];
            }
            None => {
                text.push_str("{{");
                rest = after;
            }
        }
    }
    text.push_str(rest);
    text
}
