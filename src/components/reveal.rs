//! Reveal-on-scroll for `[data-animate]` elements.
//!
//! Each element is revealed once, the first time enough of it is visible,
//! and then unobserved. With reduced motion requested, everything is
//! revealed up front and nothing is observed.

/// Initial-state classes removed on reveal.
pub const HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "translate-y-4"];
pub const VISIBLE_CLASS: &str = "animate-visible";
pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(feature = "csr")]
use web_sys::Element;

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::state::reveal::RevealLedger;
#[cfg(feature = "csr")]
use crate::util::dom;

#[cfg(feature = "csr")]
fn show(element: &Element) {
    for class in HIDDEN_CLASSES {
        dom::set_class(element, class, false);
    }
    dom::set_class(element, VISIBLE_CLASS, true);
}

#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig) -> Result<(), SetupError> {
    let elements = dom::query_all(&config.selectors.reveal)?;
    if elements.is_empty() {
        return Err(SetupError::missing(&config.selectors.reveal));
    }
    let mut ledger = RevealLedger::new(elements.len(), config.reveal_threshold);

    if dom::media_matches(PREFERS_REDUCED_MOTION_QUERY) {
        ledger.reveal_all();
        elements.iter().for_each(show);
        return Ok(());
    }

    let tracked = elements.clone();
    dom::observe_intersections(&elements, config.reveal_threshold, move |batch, observer| {
        for entry in batch {
            let target = entry.target();
            let Some(index) = tracked.iter().position(|el| *el == target) else {
                continue;
            };
            if ledger.observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                show(&target);
                observer.unobserve(&target);
            }
        }
    })
}
