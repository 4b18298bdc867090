use super::*;
use leptos::prelude::*;

#[test]
fn nothing_active_initially() {
    let nav = Navigator::new(MenuHandle::new());
    assert_eq!(nav.active().get_untracked(), None);
}

#[test]
fn set_active_publishes_section_id() {
    let nav = Navigator::new(MenuHandle::new());
    nav.set_active("projects");
    assert_eq!(nav.active().get_untracked().as_deref(), Some("projects"));
    nav.set_active("contact");
    assert_eq!(nav.active().get_untracked().as_deref(), Some("contact"));
}

#[test]
fn found_target_closes_open_menu() {
    let menu = MenuHandle::new();
    menu.toggle();
    let nav = Navigator::new(menu);
    nav.after_scroll(true);
    assert!(!nav.menu().is_open());
}

#[test]
fn missing_target_leaves_menu_open() {
    let menu = MenuHandle::new();
    menu.toggle();
    let nav = Navigator::new(menu);
    nav.after_scroll(false);
    assert!(nav.menu().is_open());
}

#[test]
fn found_target_with_closed_menu_stays_closed() {
    let nav = Navigator::new(MenuHandle::new());
    nav.after_scroll(true);
    assert!(!nav.menu().is_open());
}

#[test]
fn markers_untouched_until_a_section_qualifies() {
    let entries = [Some(Section::Home), Some(Section::About), None];
    assert_eq!(entry_markers(&entries, None), None);
}

#[test]
fn markers_follow_active_section() {
    let entries = [Some(Section::Home), Some(Section::About), None];
    assert_eq!(entry_markers(&entries, Some("about")), Some(vec![false, true, false]));
}

#[test]
fn underline_markup_matches_its_selector() {
    assert!(UNDERLINE_HTML.starts_with("<span"));
    assert!(UNDERLINE_HTML.contains("bg-gradient-to-r"));
    assert_eq!(UNDERLINE_SELECTOR, "span.bg-gradient-to-r");
}
