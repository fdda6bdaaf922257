use menugram_core::{ContentRequest, GeneratedContent, MenuItem, PostType, StyleKey};
use menugram_studio::{PostPreview, PreviewConfig, StoryPreview, truncate_description};

fn content() -> GeneratedContent {
    GeneratedContent::new(
        "🔥 Truffle Arancini 🔥",
        "Foodie alert!",
        (1..=8).map(|n| format!("#tag{n}")).collect(),
        StyleKey::Bold,
        vec!["#FF6B6B".to_string()],
    )
}

fn single() -> ContentRequest {
    ContentRequest::new("Svang", "", PostType::Single)
        .with_location("New York, NY")
        .with_menu_items(vec![
            MenuItem::new(
                "Truffle Arancini",
                "Delicate truffle arancini with aged parmesan, micro herbs and a saffron aioli",
            )
            .with_price(Some("$24.00".to_string()))
            .with_image(Some("/menu.webp".to_string())),
        ])
}

#[test]
fn post_shows_four_hashtags_and_a_truncated_description() {
    let preview = PostPreview::new(&single(), &content(), &PreviewConfig::default());

    assert_eq!(preview.hashtags(), &["#tag1", "#tag2", "#tag3", "#tag4"]);
    assert_eq!(preview.featured().title(), "Truffle Arancini");
    assert_eq!(preview.featured().description().chars().count(), 63);
    assert!(preview.featured().description().ends_with("..."));
    assert_eq!(preview.header().avatar_initial(), &'S');
    assert_eq!(*preview.style().key(), StyleKey::Bold);

    let text = preview.to_string();
    assert!(text.contains("Svang Foodie alert!"));
    assert!(text.contains("$24.00"));
}

#[test]
fn story_shows_three_hashtags_and_a_longer_description() {
    let preview = StoryPreview::new(&single(), &content(), &PreviewConfig::default());

    assert_eq!(preview.hashtags().len(), 3);
    assert!(!preview.featured().description().ends_with("..."));
    assert!(preview.to_string().contains("#tag1  #tag2  #tag3"));
}

#[test]
fn blank_fields_use_fallbacks() {
    let request = ContentRequest::new("  ", "", PostType::Menu);

    let preview = PostPreview::new(&request, &content(), &PreviewConfig::default());

    assert_eq!(preview.header().display_name(), "Restaurant");
    assert_eq!(preview.header().location(), "Location");
    assert_eq!(preview.header().avatar_initial(), &'R');
    assert_eq!(preview.featured().description(), "");
}

#[test]
fn user_image_posts_show_the_customer_photo() {
    let request = ContentRequest::new("Bella Vista", "@bv", PostType::UserImage)
        .with_user_image(Some("customer.jpg".to_string()));

    let preview = PostPreview::new(&request, &content(), &PreviewConfig::default());

    assert_eq!(preview.featured().image().as_deref(), Some("customer.jpg"));
    assert_eq!(preview.featured().title(), "Bella Vista");
}

#[test]
fn truncation_counts_characters() {
    assert_eq!(truncate_description("soufflé", 6), "souffl...");
    assert_eq!(truncate_description("soufflé", 7), "soufflé");
}
