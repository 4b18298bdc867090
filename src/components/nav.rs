//! Primary navigation: smooth scrolling and active-section highlighting.
//!
//! DESIGN
//! ======
//! `Navigator` is the only capability other components receive. It scrolls
//! to a section (closing the mobile menu afterwards) and publishes the
//! active section id, which both the desktop nav and the mobile menu render.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

use crate::components::mobile_menu::MenuHandle;
use crate::state::nav::{Section, is_entry_active};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use web_sys::Element;

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::state::nav::ActiveSectionTracker;
#[cfg(feature = "csr")]
use crate::util::dom;

pub const ACTIVE_CLASS: &str = "active";
pub const UNDERLINE_SELECTOR: &str = "span.bg-gradient-to-r";
pub const UNDERLINE_HTML: &str = r#"<span class="absolute -bottom-2 left-1/2 h-0.5 w-6 -translate-x-1/2 rounded-full bg-gradient-to-r from-blue-500 to-purple-500"></span>"#;

#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    active: RwSignal<Option<String>>,
    menu: MenuHandle,
}

impl Navigator {
    pub fn new(menu: MenuHandle) -> Self {
        Self { active: RwSignal::new(None), menu }
    }

    pub fn menu(&self) -> MenuHandle {
        self.menu
    }

    /// Id of the section currently in focus, if any has qualified yet.
    pub fn active(&self) -> RwSignal<Option<String>> {
        self.active
    }

    /// Smooth-scroll to section `id`, then close the mobile menu.
    ///
    /// Unknown ids are ignored and leave the menu as it is.
    pub fn scroll_to(&self, id: &str) {
        #[cfg(feature = "csr")]
        self.after_scroll(dom::scroll_to_id(id));
        #[cfg(not(feature = "csr"))]
        let _ = id;
    }

    /// Close the mobile menu once a scroll target was found.
    pub fn after_scroll(&self, found: bool) {
        if found {
            self.menu.close_if_open();
        }
    }

    /// Mark section `id` active in both the nav and the mobile menu.
    pub fn set_active(&self, id: &str) {
        if self.active.with_untracked(|current| current.as_deref() == Some(id)) {
            return;
        }
        self.active.set(Some(id.to_owned()));
    }
}

/// Active flag per nav entry, or `None` while no section has qualified and
/// the page's own markers should stay untouched.
pub fn entry_markers(sections: &[Option<Section>], active: Option<&str>) -> Option<Vec<bool>> {
    let active = active?;
    Some(sections.iter().map(|section| is_entry_active(*section, Some(active))).collect())
}

#[cfg(feature = "csr")]
fn mark_entry(button: &Element, active: bool) {
    dom::set_class(button, ACTIVE_CLASS, active);
    let underline = dom::query_in(button, UNDERLINE_SELECTOR);
    match (active, underline) {
        (true, None) => {
            let _ = button.insert_adjacent_html("beforeend", UNDERLINE_HTML);
        }
        (false, Some(underline)) => underline.remove(),
        _ => {}
    }
}

/// Wire nav clicks and the active-section observer.
#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig, nav: Navigator) -> Result<(), SetupError> {
    let entries: Vec<(Element, Option<Section>)> = dom::query_opt(&config.selectors.primary_nav)
        .map(|primary| dom::query_all_in(&primary, "button"))
        .unwrap_or_default()
        .into_iter()
        .map(|button| {
            let section = Section::from_label(&dom::text_of(&button));
            (button, section)
        })
        .collect();

    for (button, section) in &entries {
        let Some(section) = *section else {
            continue;
        };
        dom::listen(button, "click", move |ev| {
            ev.prevent_default();
            nav.scroll_to(section.id());
        })?;
    }

    let sections = dom::query_all(&config.selectors.sections)?;
    if sections.is_empty() {
        return Err(SetupError::missing(&config.selectors.sections));
    }

    let active = nav.active();
    let labels: Vec<Option<Section>> = entries.iter().map(|(_, section)| *section).collect();
    Effect::new(move || {
        let Some(markers) = active.with(|id| entry_markers(&labels, id.as_deref())) else {
            return;
        };
        for ((button, _), on) in entries.iter().zip(markers) {
            mark_entry(button, on);
        }
    });

    let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(
        config.active_section_threshold,
        sections.iter().map(Element::id),
    )));
    dom::observe_intersections(&sections, config.active_section_threshold, move |batch, _| {
        let mut tracker = tracker.borrow_mut();
        for entry in &batch {
            tracker.record(&entry.target().id(), entry.is_intersecting(), entry.intersection_ratio());
        }
        if let Some(id) = tracker.most_visible() {
            nav.set_active(id);
        }
    })
}
