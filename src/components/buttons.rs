//! Generic call-to-action buttons.

#[cfg(test)]
#[path = "buttons_test.rs"]
mod buttons_test;

#[cfg(feature = "csr")]
use crate::components::nav::Navigator;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::state::nav::Section;
#[cfg(feature = "csr")]
use crate::util::dom;

/// A "View Projects"-style shortcut: both tokens somewhere in its text.
pub fn is_view_projects(text: &str) -> bool {
    text.contains("View") && text.contains("Projects")
}

/// Bind the first "View Projects" button to scroll to the projects section.
#[cfg(feature = "csr")]
pub fn setup(nav: Navigator) -> Result<(), SetupError> {
    let Some(button) = dom::query_all("button")?
        .into_iter()
        .find(|button| is_view_projects(&dom::text_of(button)))
    else {
        return Err(SetupError::missing("button (View Projects)"));
    };
    dom::listen(&button, "click", move |ev| {
        ev.prevent_default();
        nav.scroll_to(Section::Projects.id());
    })
}
