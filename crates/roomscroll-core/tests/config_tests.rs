// Host-side tests for configuration defaults and markup overrides.

use roomscroll_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_within_documented_ranges() {
    let c = NavConfig::default();
    assert!((900.0..=981.0).contains(&c.breakpoint_px));
    assert!((0.4..=0.55).contains(&c.visible_threshold));
    assert!((650.0..=760.0).contains(&c.scroll_duration_ms));
    assert!((120..=180).contains(&c.resize_debounce_ms));
    // Navigation waits for the fade to finish.
    assert!(c.enter_delay_ms >= c.entry_fade_ms);
    assert!(!c.center_panels);
    assert!(!c.cinematic_deep_link);
}

#[test]
fn overrides_parse_units_and_booleans() {
    let mut c = NavConfig::default();
    c.apply_override("breakpoint", "981px").unwrap();
    c.apply_override("scroll-duration", "760").unwrap();
    c.apply_override("resize-debounce", "120ms").unwrap();
    c.apply_override("center-panels", "").unwrap();
    c.apply_override("cinematic-deep-link", "false").unwrap();
    assert_eq!(c.breakpoint_px, 981.0);
    assert_eq!(c.scroll_duration_ms, 760.0);
    assert_eq!(c.resize_debounce_ms, 120);
    assert!(c.center_panels);
    assert!(!c.cinematic_deep_link);
}

#[test]
fn bad_overrides_leave_config_untouched() {
    let mut c = NavConfig::default();
    assert_eq!(
        c.apply_override("speed", "fast"),
        Err(ConfigError::UnknownKey("speed".into()))
    );
    assert!(matches!(
        c.apply_override("visible-threshold", "lots"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        c.apply_override("visible-threshold", "1.5"),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        c.apply_override("center-panels", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(c, NavConfig::default());
}

#[test]
fn every_listed_key_is_accepted() {
    let samples = [
        ("breakpoint", "960"),
        ("anchor-offset", "24"),
        ("visible-threshold", "0.5"),
        ("scroll-duration", "700"),
        ("resize-debounce", "150"),
        ("entry-fade", "400"),
        ("enter-delay", "450"),
        ("deep-link-delay", "60"),
        ("center-panels", "1"),
        ("cinematic-deep-link", "on"),
    ];
    assert_eq!(samples.len(), NavConfig::KEYS.len());
    let mut c = NavConfig::default();
    for (key, value) in samples {
        assert!(NavConfig::KEYS.contains(&key));
        c.apply_override(key, value).unwrap();
    }
}

#[test]
fn home_aliases_are_case_and_space_insensitive() {
    assert!(is_home_alias(""));
    assert!(is_home_alias(" Arrival "));
    assert!(is_home_alias("home"));
    assert!(!is_home_alias("dinner"));
}
