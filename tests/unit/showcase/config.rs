use super::*;

#[test]
fn defaults_are_valid() {
    ShowcaseConfig::default().validate().unwrap();
}

#[test]
fn defaults_match_showcase_tables() {
    let cfg = ShowcaseConfig::default();
    assert_eq!(cfg.hero.scale.sample(0.5), 1.2);
    assert_eq!(cfg.orbs.count, 5);
    assert_eq!(cfg.orbs.base_duration, 3.0);
    assert_eq!(cfg.orbs.duration_step, 0.5);
    assert_eq!(cfg.orbs.delay_step, 0.3);
    assert!(cfg.features.in_view.once);
    assert_eq!(cfg.gallery.rotate.sample(0.0), -10.0);
    assert_eq!(cfg.gallery.rotate.sample(1.0), 10.0);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = ShowcaseConfig::from_json(
        r#"{
            "features": { "count": 9, "stagger": { "stagger_children": 0.05 } },
            "hero": { "offset": ["start start", "end 20%"] }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.features.count, 9);
    assert_eq!(cfg.features.stagger.stagger_children, 0.05);
    assert_eq!(cfg.features.columns, 3);
    assert_eq!(cfg.hero.offset, ScrollOffset::parse("start start", "end 0.2").unwrap());
    assert_eq!(cfg.sections, SectionHeights::default());
}

#[test]
fn mismatched_mapping_is_rejected() {
    let err = ShowcaseConfig::from_json(
        r#"{ "gallery": { "rotate": { "breakpoints": [0.0, 1.0], "outputs": [5.0] } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ScrollfxError::Validation(_)));
}

#[test]
fn invalid_values_are_rejected() {
    let mut cfg = ShowcaseConfig::default();
    cfg.sections.gallery = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ShowcaseConfig::default();
    cfg.features.columns = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ShowcaseConfig::default();
    cfg.orbs.float_y.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = ShowcaseConfig::default();
    cfg.features.transition.duration = -1.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ShowcaseConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ScrollfxError::Serde(_)));
}

#[test]
fn default_config_survives_json() {
    let json = serde_json::to_string(&ShowcaseConfig::default()).unwrap();
    let back = ShowcaseConfig::from_json(&json).unwrap();
    assert_eq!(back.hero.offset, ScrollOffset::EXIT);
    assert_eq!(back.features.in_view, ShowcaseConfig::default().features.in_view);
}

#[test]
fn oversized_counts_are_rejected() {
    let err = ShowcaseConfig::from_json(r#"{"features":{"count":18446744073709551615}}"#)
        .unwrap_err();
    assert!(matches!(err, ScrollfxError::Validation(_)), "{err}");

    let mut cfg = ShowcaseConfig::default();
    cfg.orbs.count = MAX_ELEMENTS + 1;
    assert!(cfg.validate().is_err());

    let mut cfg = ShowcaseConfig::default();
    cfg.gallery.count = MAX_ELEMENTS;
    cfg.validate().unwrap();
    cfg.gallery.count += 1;
    assert!(cfg.validate().is_err());
}
