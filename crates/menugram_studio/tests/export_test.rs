use menugram_core::{GeneratedContent, StyleKey};
use menugram_studio::{
    Clipboard, CopyTarget, DOWNLOAD_FILE_NAME, MemoryClipboard, caption_line,
    content_download_text, copy_to, download_text, full_caption, hashtag_line, to_json,
    write_download,
};

fn content() -> GeneratedContent {
    GeneratedContent::new(
        "✨ Tonight's featured menu ✨",
        "Experience the best of Bella Vista!",
        vec!["#bellavista_nyc".to_string(), "#BellaVista".to_string()],
        StyleKey::Elegant,
        vec!["#FF6B6B".to_string()],
    )
}

#[test]
fn joins_are_exact() {
    let content = content();

    assert_eq!(
        caption_line("@bellavista_nyc", content.caption()),
        "@bellavista_nyc Experience the best of Bella Vista!"
    );
    assert_eq!(hashtag_line(content.hashtags()), "#bellavista_nyc #BellaVista");
    assert_eq!(
        full_caption("@bellavista_nyc", &content),
        "@bellavista_nyc Experience the best of Bella Vista!\n\n#bellavista_nyc #BellaVista"
    );
}

#[test]
fn download_has_three_sections() {
    assert_eq!(
        download_text("cap", "#a #b", "story"),
        "Caption:\ncap\n\nHashtags:\n#a #b\n\nStory Caption:\nstory"
    );

    let with_story = content().with_story_caption(Some("Which course?".to_string()));
    assert!(content_download_text(&with_story).ends_with("Story Caption:\nWhich course?"));
    assert!(content_download_text(&content()).ends_with("Story Caption:\n"));
}

#[test]
fn download_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("exports");

    let path = write_download(&target, &content()).unwrap();

    assert_eq!(path, target.join(DOWNLOAD_FILE_NAME));
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, content_download_text(&content()));
}

#[test]
fn clipboard_receives_the_selected_text() {
    let mut clipboard = MemoryClipboard::default();
    assert_eq!(clipboard.contents(), None);

    let copied = copy_to(&mut clipboard, CopyTarget::Hashtags, "@bv", &content());
    assert_eq!(copied, "#bellavista_nyc #BellaVista");
    assert_eq!(clipboard.contents(), Some("#bellavista_nyc #BellaVista"));

    copy_to(&mut clipboard, CopyTarget::FullCaption, "@bv", &content());
    assert_eq!(clipboard.contents(), Some(full_caption("@bv", &content()).as_str()));

    assert_eq!(CopyTarget::StoryCaption.text("@bv", &content()), "");
    assert_eq!("full-caption".parse::<CopyTarget>().unwrap(), CopyTarget::FullCaption);
}

#[test]
fn json_uses_lowercase_style() {
    let json = to_json(&content()).unwrap();

    assert!(json.contains("\"style\": \"elegant\""));
    assert!(!json.contains("story_caption"));
}
