use super::*;
use leptos::prelude::*;

#[test]
fn handle_starts_closed() {
    assert!(!MenuHandle::new().is_open());
}

#[test]
fn toggle_opens_and_closes() {
    let menu = MenuHandle::new();
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());
}

#[test]
fn close_if_open_is_idempotent() {
    let menu = MenuHandle::new();
    menu.close_if_open();
    assert_eq!(menu.state().get_untracked(), MenuState::Closed);
    menu.toggle();
    menu.close_if_open();
    menu.close_if_open();
    assert_eq!(menu.state().get_untracked(), MenuState::Closed);
}

#[test]
fn copies_share_state() {
    let menu = MenuHandle::new();
    let other = menu;
    other.toggle();
    assert!(menu.is_open());
}
