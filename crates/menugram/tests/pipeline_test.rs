use menugram::{
    CaptionGenerator, CaptionShape, ContentAssembler, ContentRequest, Course, Flow,
    GenerationSession, MENU_POOL, MenuCatalog, MenuDraft, MenuItem, MenugramError, PostPreview,
    PostType, RandomSampler, StudioConfig, ValidationErrorKind, full_caption, validate_request,
    write_download,
};

#[test]
fn bella_vista_menu_post() {
    let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
        .with_menu_items(vec![
            MenuItem::new("Truffle Arancini", "Crispy risotto balls"),
            MenuItem::new("Osso Buco", "Braised veal shank"),
            MenuItem::new("Tiramisu", "Espresso-soaked ladyfingers"),
        ]);
    assert!(validate_request(&request, Flow::Post).is_ok());

    for seed in 0..10 {
        let content =
            ContentAssembler::new(Flow::Post).assemble(&request, &mut RandomSampler::seeded(seed));
        let tags = content.hashtags();
        assert_eq!(&tags[..2], &["#bellavista_nyc", "#BellaVista"]);
        assert!(tags.len() <= 8);
        assert!(tags.iter().any(|tag| MENU_POOL.contains(&tag.as_str())));
    }
}

#[test]
fn scanned_arancini_post() {
    let request = MenuCatalog::demo()
        .resolve(None)
        .unwrap()
        .to_request("elegant", vec![]);
    let candidates =
        CaptionGenerator::new().rendered_candidates(&request, CaptionShape::Standalone);

    let content =
        ContentAssembler::new(Flow::Item).assemble(&request, &mut RandomSampler::seeded(21));

    assert!(candidates.contains(content.caption()));
    assert!(content.caption().contains("Truffle Arancini"));
    assert!(content.caption().contains("Svang"));
    assert!(content.hashtags().len() <= 6);

    let preview = PostPreview::new(&request, &content, &StudioConfig::default().preview);
    assert_eq!(preview.header().location(), "New York, NY");
    assert!(full_caption("Svang", &content).starts_with("Svang "));
}

#[test]
fn missing_information_surfaces_through_the_facade_error() {
    let request = ContentRequest::new("Bella Vista", "", PostType::Single);

    let err: MenugramError = validate_request(&request, Flow::Post).unwrap_err().into();

    let validation = err.as_validation().unwrap();
    assert_eq!(validation.kind, ValidationErrorKind::MissingRestaurantHandle);
    assert_eq!(
        validation.notice(),
        "Missing Information: Please fill in restaurant name and handle"
    );
}

#[tokio::test(start_paused = true)]
async fn five_course_pipeline_with_download() {
    let mut draft = MenuDraft::new();
    for (course, name) in [
        (Course::Appetizer, "Truffle Arancini"),
        (Course::Soup, "Butternut Bisque"),
        (Course::Main, "Duck Breast"),
        (Course::Dessert, "Chocolate Soufflé"),
        (Course::Beverage, "House Sangria"),
    ] {
        draft
            .add(course, name, course.suggested_description(), "")
            .unwrap();
    }
    let request = draft.to_request("Bella Vista", "@bellavista_nyc", "elegant", vec![]);

    let session = GenerationSession::from_config(
        Flow::Batch,
        &StudioConfig::default(),
        RandomSampler::seeded(8),
    );
    session.submit(request).unwrap();
    let content = session.wait_ready().await.unwrap();

    assert!(content.caption().contains("5-course"));
    assert!(content.caption().contains("#BellaVista"));
    assert!(content.story_caption().is_some());

    let dir = tempfile::tempdir().unwrap();
    let path = write_download(dir.path(), &content).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("Caption:\n"));
    assert!(text.contains("\n\nStory Caption:\n"));
}
