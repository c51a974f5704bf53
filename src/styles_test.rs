use super::*;

#[test]
fn stylesheet_covers_every_component_class() {
    for class in [
        ".wa-widget ",
        ".wa-widget__trigger",
        ".wa-widget__badge",
        ".wa-widget__badge--fading",
        ".wa-widget__badge--hidden",
        ".wa-widget__panel",
        ".wa-widget__panel--open",
        ".wa-widget__header",
        ".wa-widget__avatar",
        ".wa-widget__name",
        ".wa-widget__status",
        ".wa-widget__body",
        ".wa-widget__time",
        ".wa-widget__message",
        ".wa-widget__input-row",
        ".wa-widget__input",
        ".wa-widget__send",
        ".wa-widget__footer-note",
    ] {
        assert!(WIDGET_CSS.contains(class), "missing rule for {class}");
    }
}

#[test]
fn body_keeps_its_sheen_overlay() {
    assert!(WIDGET_CSS.contains(".wa-widget__body::before"));
    assert!(WIDGET_CSS.contains("pointer-events: none"));
}

#[test]
fn stylesheet_defines_both_animations() {
    assert!(WIDGET_CSS.contains("@keyframes wa-widget-float"));
    assert!(WIDGET_CSS.contains("@keyframes wa-widget-ripple"));
}

#[test]
fn style_marker_is_distinct_from_root_marker() {
    assert_ne!(STYLE_ID, crate::widget::ROOT_ID);
}
