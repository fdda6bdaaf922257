use menugram_core::{Course, Flow, StyleKey};
use strum::IntoEnumIterator;

#[test]
fn style_keys_parse_exactly() {
    for key in StyleKey::iter() {
        assert_eq!(StyleKey::parse_or_default(key.as_ref()), key);
    }
}

#[test]
fn unknown_style_falls_back_to_elegant() {
    for input in ["", "MINIMAL", "Playful", "neon", " bold"] {
        assert_eq!(StyleKey::parse_or_default(input), StyleKey::Elegant);
    }
}

#[test]
fn style_labels_and_descriptions() {
    assert_eq!(StyleKey::Minimal.label(), "Minimal");
    assert_eq!(StyleKey::Bold.description(), "Vibrant and eye-catching");
}

#[test]
fn five_courses_in_menu_order() {
    let courses: Vec<_> = Course::iter().collect();
    assert_eq!(courses.len(), 5);
    assert_eq!(courses[0], Course::Appetizer);
    assert_eq!(courses[4], Course::Beverage);
    assert_eq!(Course::Main.display_name(), "Main Course");
    assert_eq!("dessert".parse::<Course>().unwrap(), Course::Dessert);
}

#[test]
fn flow_caps() {
    assert_eq!(Flow::Post.default_hashtag_cap(), 8);
    assert_eq!(Flow::Item.default_hashtag_cap(), 6);
    assert_eq!(Flow::Batch.default_hashtag_cap(), 8);
    assert!(Flow::Batch.embeds_hashtags());
    assert!(!Flow::Item.embeds_hashtags());
}
