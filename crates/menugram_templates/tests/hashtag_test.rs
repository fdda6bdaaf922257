use menugram_core::{ContentRequest, Flow, MenuItem, PostType};
use menugram_templates::{HashtagGenerator, HashtagProfile, MENU_POOL, USER_IMAGE_POOL};
use std::collections::HashSet;

fn tags(request: &ContentRequest, flow: Flow) -> Vec<String> {
    HashtagGenerator::new().generate(request, &HashtagProfile::for_flow(flow))
}

fn three_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Truffle Arancini", "Crispy risotto balls"),
        MenuItem::new("Wagyu Beef", "Seared tenderloin"),
        MenuItem::new("Lava Cake", "Molten chocolate"),
    ]
}

#[test]
fn menu_post_leads_with_handle_and_name_and_keeps_menu_tags() {
    let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
        .with_menu_items(three_items());

    let tags = tags(&request, Flow::Post);

    assert_eq!(
        tags,
        vec![
            "#bellavista_nyc",
            "#BellaVista",
            "#Foodie",
            "#Delicious",
            "#Restaurant",
            "#Food",
            "#Menu",
            "#Dining",
        ]
    );
    assert!(tags.iter().any(|tag| MENU_POOL.contains(&tag.as_str())));
}

#[test]
fn single_item_flow_skips_empty_handle_and_caps_at_six() {
    let request = ContentRequest::new("Svang", "", PostType::Single).with_menu_items(vec![
        MenuItem::new("Truffle Arancini", "Crispy risotto balls")
            .with_price(Some("$24.00".to_string())),
    ]);

    let tags = tags(&request, Flow::Item);

    assert_eq!(
        tags,
        vec![
            "#Svang",
            "#TruffleArancini",
            "#Foodie",
            "#Delicious",
            "#Restaurant",
            "#Food",
        ]
    );
    assert!(!tags.iter().any(|tag| tag == "#"));
}

#[test]
fn user_image_post_reserves_customer_tags() {
    let request = ContentRequest::new("Bella Vista", "bellavista_nyc", PostType::UserImage);

    let tags = tags(&request, Flow::Post);

    assert_eq!(tags.len(), 8);
    assert_eq!(tags[0], "#bellavista_nyc");
    assert_eq!(&tags[6..], &["#CustomerPhoto", "#FoodPhoto"]);
    assert!(tags.iter().any(|tag| USER_IMAGE_POOL.contains(&tag.as_str())));
}

#[test]
fn batch_flow_tags_menu_items_after_name() {
    let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
        .with_menu_items(three_items());

    let tags = tags(&request, Flow::Batch);

    assert_eq!(
        tags,
        vec![
            "#bellavista_nyc",
            "#BellaVista",
            "#TruffleArancini",
            "#WagyuBeef",
            "#LavaCake",
            "#Foodie",
            "#Menu",
            "#Dining",
        ]
    );
}

#[test]
fn duplicates_are_removed_case_insensitively() {
    let request = ContentRequest::new("foodie", "@Menu", PostType::Menu);

    let tags = HashtagGenerator::new().generate(
        &request,
        &HashtagProfile::for_flow(Flow::Post).with_cap(usize::MAX),
    );

    let lowered: HashSet<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
    assert_eq!(lowered.len(), tags.len());
    assert_eq!(tags[0], "#Menu");
    assert_eq!(tags[1], "#foodie");
    assert!(!tags.contains(&"#Foodie".to_string()));
    assert_eq!(tags.iter().filter(|tag| tag.as_str() == "#Menu").count(), 1);
}

#[test]
fn whitespace_and_at_sign_are_stripped() {
    let request = ContentRequest::new("  La Petite  Maison ", "@ la_petite ", PostType::Single);

    let tags = tags(&request, Flow::Post);

    assert_eq!(tags[0], "#la_petite");
    assert_eq!(tags[1], "#LaPetiteMaison");
}

#[test]
fn empty_inputs_still_produce_generic_tags() {
    let request = ContentRequest::new("", "@", PostType::Single);

    let tags = tags(&request, Flow::Post);

    assert_eq!(tags.len(), 8);
    assert_eq!(tags[0], "#Foodie");
}

#[test]
fn cap_is_never_exceeded() {
    let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
        .with_menu_items(three_items());

    for cap in 0..20 {
        for flow in [Flow::Post, Flow::Item, Flow::Batch] {
            let profile = HashtagProfile::for_flow(flow).with_cap(cap);
            let tags = HashtagGenerator::new().generate(&request, &profile);
            assert!(tags.len() <= cap, "{flow} cap {cap} gave {}", tags.len());
            if cap >= 2 {
                assert_eq!(&tags[..2], &["#bellavista_nyc", "#BellaVista"]);
            }
        }
    }
}
