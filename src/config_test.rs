use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_has_every_field_populated() {
    let config = WidgetConfig::default();
    assert!(!config.contact_handle.is_empty());
    assert!(!config.display_name.is_empty());
    assert!(!config.avatar_url.is_empty());
    assert!(!config.greeting.is_empty());
    assert!(!config.timestamp_label.is_empty());
    assert!(!config.footer_note.is_empty());
}

#[test]
fn default_contact_handle_keeps_leading_plus() {
    assert!(WidgetConfig::default().contact_handle.starts_with('+'));
}

// =============================================================
// resolve / merged
// =============================================================

#[test]
fn resolve_with_no_overrides_yields_defaults() {
    assert_eq!(
        WidgetConfig::resolve(ConfigOverrides::default()),
        WidgetConfig::default()
    );
}

#[test]
fn resolve_replaces_only_overridden_fields() {
    let config = WidgetConfig::resolve(ConfigOverrides {
        display_name: Some("Support".to_owned()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.display_name, "Support");
    assert_eq!(config.contact_handle, WidgetConfig::default().contact_handle);
    assert_eq!(config.greeting, WidgetConfig::default().greeting);
    assert_eq!(config.footer_note, WidgetConfig::default().footer_note);
}

#[test]
fn resolve_replaces_every_field_when_all_are_overridden() {
    let config = WidgetConfig::resolve(ConfigOverrides {
        contact_handle: Some("+15551234567".to_owned()),
        display_name: Some("Support".to_owned()),
        avatar_url: Some("support.png".to_owned()),
        greeting: Some("Hi!".to_owned()),
        timestamp_label: Some("09:30".to_owned()),
        footer_note: Some("We reply fast".to_owned()),
    });

    assert_eq!(config.contact_handle, "+15551234567");
    assert_eq!(config.display_name, "Support");
    assert_eq!(config.avatar_url, "support.png");
    assert_eq!(config.greeting, "Hi!");
    assert_eq!(config.timestamp_label, "09:30");
    assert_eq!(config.footer_note, "We reply fast");
}

#[test]
fn merged_applies_overrides_over_current_values() {
    let base = WidgetConfig::resolve(ConfigOverrides {
        display_name: Some("First".to_owned()),
        ..ConfigOverrides::default()
    });

    let updated = base.clone().merged(ConfigOverrides {
        greeting: Some("Hello again".to_owned()),
        ..ConfigOverrides::default()
    });

    assert_eq!(updated.display_name, "First");
    assert_eq!(updated.greeting, "Hello again");
}

#[test]
fn malformed_contact_handle_is_accepted_verbatim() {
    let config = WidgetConfig::resolve(ConfigOverrides {
        contact_handle: Some("not a number".to_owned()),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.contact_handle, "not a number");
}

// =============================================================
// ConfigOverrides::merge
// =============================================================

#[test]
fn merge_later_overrides_win() {
    let earlier = ConfigOverrides {
        display_name: Some("Earlier".to_owned()),
        greeting: Some("Hi".to_owned()),
        ..ConfigOverrides::default()
    };
    let later = ConfigOverrides {
        display_name: Some("Later".to_owned()),
        ..ConfigOverrides::default()
    };

    let merged = earlier.merge(later);
    assert_eq!(merged.display_name.as_deref(), Some("Later"));
    assert_eq!(merged.greeting.as_deref(), Some("Hi"));
    assert!(merged.contact_handle.is_none());
}

#[test]
fn merge_with_empty_later_keeps_earlier() {
    let earlier = ConfigOverrides {
        avatar_url: Some("a.png".to_owned()),
        ..ConfigOverrides::default()
    };
    let merged = earlier.clone().merge(ConfigOverrides::default());
    assert_eq!(merged, earlier);
}

#[test]
fn is_empty_only_when_no_field_is_set() {
    assert!(ConfigOverrides::default().is_empty());
    assert!(
        !ConfigOverrides {
            footer_note: Some(String::new()),
            ..ConfigOverrides::default()
        }
        .is_empty()
    );
}

// =============================================================
// JSON deserialization
// =============================================================

#[test]
fn overrides_deserialize_from_camel_case_json() {
    let overrides: ConfigOverrides = serde_json::from_str(
        r#"{"contactHandle":"+15551234567","displayName":"Support","timestampLabel":"12:00"}"#,
    )
    .expect("overrides should parse");

    assert_eq!(overrides.contact_handle.as_deref(), Some("+15551234567"));
    assert_eq!(overrides.display_name.as_deref(), Some("Support"));
    assert_eq!(overrides.timestamp_label.as_deref(), Some("12:00"));
    assert!(overrides.avatar_url.is_none());
}

#[test]
fn overrides_deserialize_from_empty_object() {
    let overrides: ConfigOverrides = serde_json::from_str("{}").expect("empty object");
    assert!(overrides.is_empty());
}
