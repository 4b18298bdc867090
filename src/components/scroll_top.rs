//! Floating scroll-to-top control.

use leptos::prelude::*;

use crate::state::scroll::ScrollMetrics;
use crate::util::icons::{self, SCROLL_TOP_ICON_SIZE};

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::util::dom;

fn scroll_to_top() {
    #[cfg(feature = "csr")]
    dom::scroll_to_top();
}

/// Shown (`.show`) once the page is scrolled past `threshold`.
#[component]
pub fn ScrollTopButton(scroll: RwSignal<ScrollMetrics>, threshold: f64) -> impl IntoView {
    view! {
        <button
            class="scroll-top"
            class:show=move || scroll.with(|metrics| metrics.is_past(threshold))
            aria-label="Scroll to top"
            inner_html=icons::arrow_up(SCROLL_TOP_ICON_SIZE)
            on:click=move |_| scroll_to_top()
        ></button>
    }
}

#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig, scroll: RwSignal<ScrollMetrics>) -> Result<(), SetupError> {
    let body = dom::body()?;
    let threshold = config.scroll_top_threshold;
    leptos::mount::mount_to(body, move || view! { <ScrollTopButton scroll=scroll threshold=threshold/> }).forget();
    Ok(())
}
