//! Mobile menu overlay mirroring the primary navigation.
//!
//! ARCHITECTURE
//! ============
//! The overlay is rendered once by Leptos into the header container. The
//! toggle button is page markup, so its icon and `aria-expanded` are kept
//! in sync imperatively from the menu state.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use leptos::prelude::*;

use crate::components::nav::Navigator;
use crate::state::menu::MenuState;
use crate::state::nav::{Section, is_entry_active};

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::util::{dom, icons};

/// Handle to the menu's open/closed state.
#[derive(Clone, Copy, Debug)]
pub struct MenuHandle {
    state: RwSignal<MenuState>,
}

impl Default for MenuHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuHandle {
    pub fn new() -> Self {
        Self { state: RwSignal::new(MenuState::default()) }
    }

    pub fn state(&self) -> RwSignal<MenuState> {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.get_untracked().is_open()
    }

    pub fn toggle(&self) {
        self.state.update(|state| {
            state.toggle();
        });
    }

    /// Close the overlay; no-op when already closed.
    pub fn close_if_open(&self) {
        if self.is_open() {
            self.state.update(|state| {
                state.close();
            });
        }
    }
}

/// Overlay with one link per navigation section.
#[component]
pub fn MobileMenu(nav: Navigator) -> impl IntoView {
    let menu = nav.menu().state();
    let active = nav.active();

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.scroll_to(section.id());
            };
            view! {
                <a
                    href=section.href()
                    data-target-id=section.id()
                    class:active=move || active.with(|id| is_entry_active(Some(section), id.as_deref()))
                    on:click=on_click
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="mobile-menu" class:open=move || menu.get().is_open() role="menu">
            {links}
        </div>
    }
}

/// Mount the overlay and wire the toggle button.
///
/// Without the toggle button or header container the menu is skipped and
/// `close_if_open` stays a no-op.
#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig, nav: Navigator) -> Result<(), SetupError> {
    let toggle = dom::query(&config.selectors.menu_toggle)?;
    let container = dom::as_html(dom::query(&config.selectors.header_container)?)?;

    leptos::mount::mount_to(container, move || view! { <MobileMenu nav=nav/> }).forget();

    let menu = nav.menu();
    toggle.set_inner_html(&icons::menu_toggle(MenuState::default().icon()));
    {
        let toggle = toggle.clone();
        Effect::new(move || {
            let state = menu.state().get();
            let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
            toggle.set_inner_html(&icons::menu_toggle(state.icon()));
        });
    }
    dom::listen(&toggle, "click", move |_| menu.toggle())?;
    Ok(())
}
