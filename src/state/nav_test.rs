use super::*;

// =============================================================
// Seeding
// =============================================================

#[test]
fn from_aria_reads_true_only() {
    assert!(NavState::from_aria(Some("true")).expanded);
    assert!(!NavState::from_aria(Some("false")).expanded);
    assert!(!NavState::from_aria(Some("TRUE")).expanded);
    assert!(!NavState::from_aria(None).expanded);
}

#[test]
fn from_aria_leaves_list_to_stylesheet() {
    let state = NavState::from_aria(Some("true"));
    assert_eq!(state.list, ListDisplay::Stylesheet);
    assert_eq!(state.list.css_value(), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_expands_and_shows_list() {
    let mut state = NavState::default();
    state.toggle();
    assert!(state.expanded);
    assert_eq!(state.aria_value(), "true");
    assert_eq!(state.list.css_value(), Some("flex"));
}

#[test]
fn toggle_twice_collapses_and_hides_list() {
    let mut state = NavState::default();
    state.toggle();
    state.toggle();
    assert!(!state.expanded);
    assert_eq!(state.aria_value(), "false");
    assert_eq!(state.list.css_value(), Some("none"));
}

// =============================================================
// Link clicks
// =============================================================

#[test]
fn link_click_above_breakpoint_changes_nothing() {
    for width in [1000.5, 1024.0, 1440.0, 3840.0] {
        for mut state in [NavState::default(), NavState { expanded: true, list: ListDisplay::Shown }] {
            let before = state;
            assert!(!state.link_clicked(width, DEFAULT_BREAKPOINT_PX));
            assert_eq!(state, before, "width {width}");
        }
    }
}

#[test]
fn link_click_at_or_below_breakpoint_always_collapses() {
    let starts = [
        NavState::default(),
        NavState { expanded: true, list: ListDisplay::Shown },
        NavState { expanded: false, list: ListDisplay::Hidden },
    ];
    for width in [320.0, 768.0, 999.9, 1000.0] {
        for mut state in starts {
            assert!(state.link_clicked(width, DEFAULT_BREAKPOINT_PX));
            assert!(!state.expanded);
            assert_eq!(state.list, ListDisplay::Hidden);
        }
    }
}

#[test]
fn link_click_honors_custom_breakpoint() {
    let mut state = NavState { expanded: true, list: ListDisplay::Shown };
    assert!(!state.link_clicked(800.0, 640.0));
    assert!(state.expanded);
    assert!(state.link_clicked(640.0, 640.0));
    assert!(!state.expanded);
}
