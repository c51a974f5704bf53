use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn initial_state_is_closed_with_visible_badge() {
    let state = WidgetState::default();
    assert!(!state.is_mounted);
    assert!(!state.is_panel_open);
    assert_eq!(state.badge, BadgeState::Visible);
    assert!(state.badge.is_visible());
}

// =============================================================
// Open / close / toggle
// =============================================================

#[test]
fn open_from_closed_opens_and_hides_badge() {
    let mut state = WidgetState::default();
    assert_eq!(state.open(), Transition::Opened);
    assert!(state.is_panel_open);
    assert_eq!(state.badge, BadgeState::Hidden);
}

#[test]
fn open_when_already_open_is_unchanged() {
    let mut state = WidgetState::default();
    state.open();
    assert_eq!(state.open(), Transition::Unchanged);
    assert!(state.is_panel_open);
}

#[test]
fn close_from_open_closes() {
    let mut state = WidgetState::default();
    state.open();
    assert_eq!(state.close(), Transition::Closed);
    assert!(!state.is_panel_open);
}

#[test]
fn close_when_already_closed_is_unchanged() {
    let mut state = WidgetState::default();
    assert_eq!(state.close(), Transition::Unchanged);
    assert!(!state.is_panel_open);
}

#[test]
fn close_does_not_resurrect_badge() {
    let mut state = WidgetState::default();
    state.open();
    state.close();
    assert_eq!(state.badge, BadgeState::Hidden);
}

#[test]
fn toggle_alternates_between_states() {
    let mut state = WidgetState::default();
    assert_eq!(state.toggle(), Transition::Opened);
    assert_eq!(state.toggle(), Transition::Closed);
    assert_eq!(state.toggle(), Transition::Opened);
}

// =============================================================
// Badge dismissal
// =============================================================

#[test]
fn badge_fade_runs_two_stages_while_closed() {
    let mut state = WidgetState::default();
    assert!(state.begin_badge_fade());
    assert_eq!(state.badge, BadgeState::Fading);
    state.finish_badge_fade();
    assert_eq!(state.badge, BadgeState::Hidden);
}

#[test]
fn badge_fade_does_not_start_while_open() {
    let mut state = WidgetState::default();
    state.open();
    state.close();
    state.open();
    assert!(!state.begin_badge_fade());
    assert_eq!(state.badge, BadgeState::Hidden);
}

#[test]
fn badge_fade_is_noop_after_open_hid_the_badge() {
    // The dismissal timer fires after the panel was opened and closed
    // again: the badge is already hidden and must stay that way.
    let mut state = WidgetState::default();
    state.open();
    state.close();
    assert!(!state.begin_badge_fade());
    state.finish_badge_fade();
    assert_eq!(state.badge, BadgeState::Hidden);
}

#[test]
fn badge_fade_does_not_restart_once_fading() {
    let mut state = WidgetState::default();
    assert!(state.begin_badge_fade());
    assert!(!state.begin_badge_fade());
    assert_eq!(state.badge, BadgeState::Fading);
}

#[test]
fn finish_fade_without_begin_keeps_badge_visible() {
    let mut state = WidgetState::default();
    state.finish_badge_fade();
    assert_eq!(state.badge, BadgeState::Visible);
}

#[test]
fn open_during_fade_hides_badge_immediately() {
    let mut state = WidgetState::default();
    state.begin_badge_fade();
    state.open();
    assert_eq!(state.badge, BadgeState::Hidden);
}

// =============================================================
// BadgeState
// =============================================================

#[test]
fn badge_visibility_mapping() {
    assert!(BadgeState::Visible.is_visible());
    assert!(BadgeState::Fading.is_visible());
    assert!(!BadgeState::Hidden.is_visible());
}
