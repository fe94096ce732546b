use super::*;

#[test]
fn default_starts_at_home() {
    let cfg = NavConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.initial_section, "home");
    assert_eq!(cfg.section_index("home"), Some(0));
    assert_eq!(
        cfg.error_markup,
        "<p>Error loading content. Please try again.</p>"
    );
}

#[test]
fn nested_transition_settings_parse() {
    let cfg = NavConfig::from_json_str(
        r#"{
            "sections": ["intro", "work"],
            "initial_section": "work",
            "transition": { "duration_ms": 500 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.section_index("work"), Some(1));
    assert_eq!(cfg.transition.duration_ms, 500.0);
    assert_eq!(cfg.transition.wide_menu_width, 185.0);
    assert_eq!(cfg.content_dir, PathBuf::from("content"));
}

#[test]
fn initial_section_must_exist() {
    let err = NavConfig::from_json_str(r#"{ "sections": ["a"], "initial_section": "b" }"#)
        .unwrap_err();
    assert!(matches!(err, GlitchswapError::Validation(_)));
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let dup = NavConfig {
        sections: vec!["home".into(), "home".into()],
        ..NavConfig::default()
    };
    assert!(dup.validate().is_err());

    let empty = NavConfig {
        sections: vec!["home".into(), String::new()],
        ..NavConfig::default()
    };
    assert!(empty.validate().is_err());

    let none = NavConfig {
        sections: Vec::new(),
        ..NavConfig::default()
    };
    assert!(none.validate().is_err());
}

#[test]
fn invalid_transition_fails_nav_validation() {
    let err = NavConfig::from_json_str(r#"{ "transition": { "duration_ms": -1 } }"#).unwrap_err();
    assert!(matches!(err, GlitchswapError::Validation(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = NavConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn panel_scroll_delay_defaults_and_validates() {
    assert_eq!(NavConfig::default().panel_scroll_delay_ms, 100.0);
    let cfg = NavConfig::from_json_str(r#"{ "panel_scroll_delay_ms": 0 }"#).unwrap();
    assert_eq!(cfg.panel_scroll_delay_ms, 0.0);

    let err = NavConfig::from_json_str(r#"{ "panel_scroll_delay_ms": -1 }"#).unwrap_err();
    assert!(matches!(err, GlitchswapError::Validation(_)));
}
