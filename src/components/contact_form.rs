//! Contact form that opens the visitor's mail client instead of posting.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

#[cfg(feature = "csr")]
use crate::config::PortfolioConfig;
#[cfg(feature = "csr")]
use crate::error::SetupError;
#[cfg(feature = "csr")]
use crate::util::dom;
#[cfg(feature = "csr")]
use crate::util::mailto::{Inquiry, resolve_recipient};

pub const NAME_FIELD: &str = r#"input[type="text"]"#;
pub const EMAIL_FIELD: &str = r#"input[type="email"]"#;
pub const MESSAGE_FIELD: &str = "textarea";

#[cfg(feature = "csr")]
fn href_of(selector: &str) -> Option<String> {
    dom::query_opt(selector).and_then(|link| link.get_attribute("href"))
}

#[cfg(feature = "csr")]
fn input(form: &Element, selector: &str) -> Option<HtmlInputElement> {
    dom::query_in(form, selector).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Intercept submission and redirect to a `mailto:` link.
///
/// The recipient is resolved once here, from the page's `mailto:` links.
#[cfg(feature = "csr")]
pub fn setup(config: &PortfolioConfig) -> Result<(), SetupError> {
    let form = dom::query(&config.selectors.contact_form)?;
    let name = input(&form, NAME_FIELD);
    let email = input(&form, EMAIL_FIELD);
    let message =
        dom::query_in(&form, MESSAGE_FIELD).and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());

    let recipient = resolve_recipient(
        href_of(&config.selectors.about_mailto).as_deref(),
        href_of(&config.selectors.any_mailto).as_deref(),
        &config.fallback_email,
    );

    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let inquiry = Inquiry {
            name: name.as_ref().map(HtmlInputElement::value).unwrap_or_default(),
            email: email.as_ref().map(HtmlInputElement::value).unwrap_or_default(),
            message: message.as_ref().map(HtmlTextAreaElement::value).unwrap_or_default(),
        };
        let uri = inquiry.mailto(&recipient);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&uri) {
                log::warn!("mailto redirect failed: {e:?}");
            }
        }
    })
}
