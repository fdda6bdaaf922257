use menugram_core::Flow;
use menugram_studio::StudioConfig;
use std::io::Write;

#[test]
fn bundled_defaults_match_built_in_defaults() {
    let bundled = StudioConfig::bundled().unwrap();

    assert_eq!(bundled, StudioConfig::default());
    assert!(bundled.validate().is_ok());
    assert_eq!(bundled.generation.delay_ms, 2000);
    assert_eq!(bundled.hashtag_cap(Flow::Post), 8);
    assert_eq!(bundled.hashtag_cap(Flow::Item), 6);
    assert_eq!(bundled.default_brand_colors(), vec!["#FF6B6B", "#4ECDC4"]);
}

#[test]
fn file_overrides_only_what_it_sets() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[hashtags]\nitem_cap = 4\n\n[defaults]\nstyle = \"bold\"\nbrand_colors = \"#000000\""
    )
    .unwrap();

    let config = StudioConfig::from_file(file.path()).unwrap();

    assert_eq!(config.hashtags.item_cap, 4);
    assert_eq!(config.hashtags.post_cap, 8);
    assert_eq!(config.defaults.style, "bold");
    assert_eq!(config.preview.post_hashtags, 4);
    assert_eq!(config.hashtag_cap(Flow::Batch), 8);
}

#[test]
fn zero_caps_and_unknown_styles_are_rejected() {
    let mut config = StudioConfig::default();
    config.hashtags.post_cap = 0;
    assert!(config.validate().unwrap_err().message.contains("post_cap"));

    let mut config = StudioConfig::default();
    config.defaults.style = "neon".to_string();
    assert!(config.validate().unwrap_err().message.contains("neon"));
}

#[test]
fn invalid_file_fails_to_load() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[hashtags]\npost_cap = 0").unwrap();

    assert!(StudioConfig::from_file(file.path()).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = StudioConfig::default();

    let text = toml::to_string(&config).unwrap();

    assert!(text.contains("[generation]"));
    assert_eq!(toml::from_str::<StudioConfig>(&text).unwrap(), config);
}

#[test]
fn blank_form_fields_use_defaults() {
    let config = StudioConfig::default();

    assert_eq!(config.style_or_default(Some("  ")), "elegant");
    assert_eq!(config.style_or_default(Some("bold")), "bold");
    assert_eq!(config.style_or_default(None), "elegant");
    assert_eq!(config.colors_or_default(Some(" , ")), vec!["#FF6B6B", "#4ECDC4"]);
    assert_eq!(config.colors_or_default(Some("#111, #222")), vec!["#111", "#222"]);
}
