use super::*;

#[test]
fn starts_closed_with_menu_glyph() {
    let state = MenuState::default();
    assert!(!state.is_open());
    assert_eq!(state.icon(), MenuIcon::Menu);
    assert_eq!(state.aria_expanded(), "false");
}

#[test]
fn toggle_flips_state_icon_and_aria() {
    let mut state = MenuState::default();
    assert_eq!(state.toggle(), MenuState::Open);
    assert_eq!(state.icon(), MenuIcon::Close);
    assert_eq!(state.aria_expanded(), "true");
    assert_eq!(state.toggle(), MenuState::Closed);
    assert_eq!(state.icon(), MenuIcon::Menu);
}

#[test]
fn close_is_idempotent() {
    let mut state = MenuState::Open;
    assert!(state.close());
    assert!(!state.close());
    assert_eq!(state, MenuState::Closed);
}
