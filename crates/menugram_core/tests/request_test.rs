use menugram_core::{ContentRequest, MenuItem, PostType, parse_brand_colors};

#[test]
fn builder_defaults_to_elegant_menu_post() {
    let request = ContentRequest::builder()
        .restaurant_name("Bella Vista")
        .build()
        .expect("Valid request");

    assert_eq!(request.style(), "elegant");
    assert_eq!(*request.post_type(), PostType::Menu);
    assert!(request.menu_items().is_empty());
    assert!(request.brand_colors().is_empty());
}

#[test]
fn subject_is_featured_item_for_single_posts() {
    let request = ContentRequest::new("Svang", "", PostType::Single).with_menu_items(vec![
        MenuItem::new("Truffle Arancini", "Delicate truffle arancini"),
        MenuItem::new("Chocolate Lava Cake", "Decadent"),
    ]);

    assert_eq!(request.subject_name(), "Truffle Arancini");
}

#[test]
fn subject_falls_back_to_restaurant_without_item() {
    let request = ContentRequest::new("Svang", "", PostType::Single);
    assert_eq!(request.subject_name(), "Svang");

    let request = ContentRequest::new("Svang", "", PostType::Single)
        .with_menu_items(vec![MenuItem::new("", "no name")]);
    assert_eq!(request.subject_name(), "Svang");
}

#[test]
fn subject_is_restaurant_for_menu_and_user_image() {
    let items = vec![MenuItem::new("Truffle Arancini", "x")];
    for post_type in [PostType::Menu, PostType::UserImage] {
        let request =
            ContentRequest::new("Bella Vista", "@bv", post_type).with_menu_items(items.clone());
        assert_eq!(request.subject_name(), "Bella Vista");
    }
}

#[test]
fn brand_colors_keep_order() {
    assert_eq!(
        parse_brand_colors("#FF6B6B,#4ECDC4,#FFE66D"),
        vec!["#FF6B6B", "#4ECDC4", "#FFE66D"]
    );
    assert!(parse_brand_colors("").is_empty());
}

#[test]
fn post_type_serializes_kebab_case() {
    let json = serde_json::to_string(&PostType::UserImage).unwrap();
    assert_eq!(json, "\"user-image\"");
    assert_eq!("user-image".parse::<PostType>().unwrap(), PostType::UserImage);
}

#[test]
fn request_deserializes_with_defaults() {
    let request: ContentRequest = serde_json::from_str(
        r#"{"restaurant_name":"Svang","post_type":"single","menu_items":[{"name":"Truffle Arancini","price":"$24.00"}]}"#,
    )
    .unwrap();

    assert_eq!(request.style(), "elegant");
    assert_eq!(request.restaurant_handle(), "");
    let item = request.featured_item().unwrap();
    assert_eq!(item.description(), "");
    assert_eq!(item.price().as_deref(), Some("$24.00"));
}
