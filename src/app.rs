//! Page bootstrap: waits for the document, then sets up every component.
//!
//! ERROR HANDLING
//! ==============
//! Components are independent. A component whose markup is missing is
//! skipped with a debug log; any other setup failure is logged as a warning.
//! Either way the remaining components still initialize.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::SetupError;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::mobile_menu::{self, MenuHandle};
#[cfg(feature = "csr")]
use crate::components::nav::{self, Navigator};
#[cfg(feature = "csr")]
use crate::components::{buttons, contact_form, reveal, scroll_progress, scroll_top, theme_toggle};
#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::util::dom;

/// How one component's setup ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    Ready,
    /// The page has no markup for this component.
    Skipped,
    Failed,
}

impl SetupOutcome {
    pub fn of(result: &Result<(), SetupError>) -> Self {
        match result {
            Ok(()) => Self::Ready,
            Err(e) if e.is_missing_markup() => Self::Skipped,
            Err(_) => Self::Failed,
        }
    }
}

#[cfg(feature = "csr")]
fn report(component: &str, result: Result<(), SetupError>) {
    match (SetupOutcome::of(&result), result) {
        (SetupOutcome::Skipped, Err(e)) => log::debug!("{component}: skipped ({e})"),
        (_, Err(e)) => log::warn!("{component}: setup failed: {e}"),
        (_, Ok(())) => log::debug!("{component}: ready"),
    }
}

/// Run [`run`] now, or on `DOMContentLoaded` while the document is loading.
#[cfg(feature = "csr")]
pub fn run_when_ready() {
    let Ok(document) = dom::document() else {
        log::warn!("no document; portfolio behavior disabled");
        return;
    };
    if document.ready_state() != "loading" {
        run();
        return;
    }
    let mut pending = true;
    let registered = dom::listen(&document, "DOMContentLoaded", move |_| {
        if std::mem::take(&mut pending) {
            run();
        }
    });
    if let Err(e) = registered {
        log::warn!("could not wait for DOMContentLoaded ({e}); initializing now");
        run();
    }
}

/// Set up every component against the current document.
///
/// Reactive state is created under a root owner that lives for the rest of
/// the page session.
#[cfg(feature = "csr")]
pub fn run() {
    // Effects are created before the first mount, so the spawner has to be
    // ready before any component is set up.
    if any_spawner::Executor::init_wasm_bindgen().is_err() {
        log::debug!("async executor already initialized");
    }
    let config = PortfolioConfig::load();
    let owner = Owner::new();
    owner.with(|| mount(&config));
    std::mem::forget(owner);
}

#[cfg(feature = "csr")]
fn mount(config: &PortfolioConfig) {
    report("theme", theme_toggle::setup(config));

    let scroll = RwSignal::new(dom::scroll_metrics());
    report("scroll watcher", scroll_progress::watch_scroll(scroll));
    report("scroll progress", scroll_progress::setup(config, scroll));
    report("reveal", reveal::setup(config));

    let navigator = Navigator::new(MenuHandle::new());
    report("mobile menu", mobile_menu::setup(config, navigator));
    report("navigation", nav::setup(config, navigator));
    report("buttons", buttons::setup(navigator));

    report("scroll to top", scroll_top::setup(config, scroll));
    report("contact form", contact_form::setup(config));
}
