use menugram_core::{Course, Flow, PostType, validate_request};
use menugram_error::{CatalogErrorKind, ValidationErrorKind};
use menugram_studio::{MenuCatalog, MenuDraft};

#[test]
fn missing_id_resolves_to_the_first_dish() {
    let catalog = MenuCatalog::demo();

    let item = catalog.resolve(None).unwrap();

    assert_eq!(item.id(), "1");
    assert_eq!(item.price(), "$24.00");
    assert_eq!(catalog.items().len(), 3);
}

#[test]
fn unknown_id_is_an_error() {
    let catalog = MenuCatalog::demo();

    let err = catalog.resolve(Some("7")).unwrap_err();

    assert_eq!(err.kind, CatalogErrorKind::ItemNotFound("7".to_string()));
}

#[test]
fn scanned_item_becomes_a_single_request() {
    let catalog = MenuCatalog::demo();
    let item = catalog.resolve(Some("2")).unwrap();

    let request = item.to_request("bold", vec!["#000".to_string()]);

    assert_eq!(*request.post_type(), PostType::Single);
    assert_eq!(request.restaurant_name(), "Svang");
    assert_eq!(request.restaurant_handle(), "");
    assert_eq!(request.location(), "New York, NY");
    assert_eq!(request.subject_name(), "Wagyu Beef Tenderloin");
    assert_eq!(request.style(), "bold");
    assert!(validate_request(&request, Flow::Item).is_ok());
}

#[test]
fn draft_rejects_incomplete_courses() {
    let mut draft = MenuDraft::new();

    let err = draft.add(Course::Soup, "", "Bisque", "").unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::MissingItemName);

    let err = draft.add(Course::Soup, "Bisque", "", "").unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::MissingItemDescription);

    assert!(draft.is_empty());
    assert!(!draft.is_ready());
}

#[test]
fn draft_builds_a_menu_request_in_order() {
    let mut draft = MenuDraft::new();
    for course in [Course::Appetizer, Course::Main, Course::Dessert] {
        draft
            .add(course, course.display_name(), course.suggested_description(), "")
            .unwrap();
    }
    assert!(draft.meets_suggested_minimum());
    assert_eq!(draft.progress(), "3/5 courses added");

    let removed = draft.remove(1).unwrap();
    assert_eq!(*removed.course(), Course::Main);
    assert!(draft.remove(9).is_none());

    let request = draft.to_request("Bella Vista", "@bellavista_nyc", "elegant", vec![]);
    let names: Vec<&str> = request
        .menu_items()
        .iter()
        .map(|item| item.name().as_str())
        .collect();
    assert_eq!(names, vec!["Appetizer", "Dessert"]);
    assert_eq!(*request.post_type(), PostType::Menu);
    assert!(request.menu_items()[0].price().is_none());
    assert!(validate_request(&request, Flow::Batch).is_ok());
}
