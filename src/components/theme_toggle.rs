//! Theme toggle: applies the effective theme and persists explicit choices.
//!
//! The theme is a single `dark` class on `<body>`. The toggle button's icon
//! is replaced on every change. System scheme changes are followed until the
//! user toggles once.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use web_sys::{Element, HtmlElement};

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::state::theme::{Theme, ThemeManager};
#[cfg(feature = "csr")]
use crate::util::storage::LocalStore;
#[cfg(feature = "csr")]
use crate::util::{dom, icons};

pub const DARK_CLASS: &str = "dark";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "csr")]
fn apply(body: &HtmlElement, toggle: Option<&Element>, theme: Theme) {
    dom::set_class(body, DARK_CLASS, theme.is_dark());
    if let Some(toggle) = toggle {
        toggle.set_inner_html(&icons::theme_toggle(theme));
    }
}

/// Apply the initial theme and wire the toggle and system-scheme listeners.
///
/// A missing toggle button only disables toggling; the theme is still
/// applied and system changes are still followed.
#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig) -> Result<(), SetupError> {
    let window = dom::window()?;
    let body = dom::body()?;
    let toggle = dom::query_opt(&config.selectors.theme_toggle);

    let manager = ThemeManager::load(
        LocalStore::new(config.theme_storage_key.as_str()),
        dom::media_matches(PREFERS_DARK_QUERY),
    );
    let theme = RwSignal::new(manager.current());
    let manager = Rc::new(RefCell::new(manager));

    apply(&body, toggle.as_ref(), theme.get_untracked());
    {
        let toggle = toggle.clone();
        Effect::new(move || {
            apply(&body, toggle.as_ref(), theme.get());
        });
    }

    if let Some(toggle) = &toggle {
        let manager = Rc::clone(&manager);
        dom::listen(toggle, "click", move |_| {
            let next = manager.borrow_mut().toggle();
            theme.set(next);
        })?;
    }

    if let Some(query) = window.match_media(PREFERS_DARK_QUERY)? {
        let query_for_cb = query.clone();
        dom::listen(&query, "change", move |_| {
            if let Some(next) = manager.borrow_mut().on_system_change(query_for_cb.matches()) {
                theme.set(next);
            }
        })?;
    }
    Ok(())
}
