//! Page behavior components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component attaches to existing page markup (or injects its own) and
//! owns one piece of state. Cross-component calls go through the
//! `Navigator` and `MenuHandle` handles; nothing is published on `window`.

pub mod buttons;
pub mod contact_form;
pub mod mobile_menu;
pub mod nav;
pub mod reveal;
pub mod scroll_progress;
pub mod scroll_top;
pub mod theme_toggle;
