//! Scroll progress bar and the shared scroll watcher.

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::state::scroll::{ScrollMetrics, progress_width};
#[cfg(feature = "csr")]
use crate::util::dom;

/// Keep `scroll` current on every scroll (passive) and resize event.
#[cfg(feature = "csr")]
pub fn watch_scroll(scroll: RwSignal<ScrollMetrics>) -> Result<(), SetupError> {
    let window = dom::window()?;
    dom::listen_passive(&window, "scroll", move |_| scroll.set(dom::scroll_metrics()))?;
    dom::listen(&window, "resize", move |_| scroll.set(dom::scroll_metrics()))?;
    Ok(())
}

/// Drive the progress bar's width from `scroll`.
#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig, scroll: RwSignal<ScrollMetrics>) -> Result<(), SetupError> {
    let bar = dom::as_html(dom::query(&config.selectors.progress_bar)?)?;
    Effect::new(move || {
        let width = scroll.with(progress_width);
        let _ = bar.style().set_property("width", &width);
    });
    Ok(())
}
