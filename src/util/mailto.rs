//! `mailto:` link construction for the contact form.
//!
//! Encoding matches `encodeURIComponent`: everything outside
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded as UTF-8.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MAILTO_SCHEME: &str = "mailto:";
const ANONYMOUS_SENDER: &str = "Visitor";

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Address part of a `mailto:` href, without scheme or query.
pub fn address_from_href(href: &str) -> Option<String> {
    let rest = href.trim().strip_prefix(MAILTO_SCHEME)?;
    let address = rest.split('?').next().unwrap_or_default().trim();
    if address.is_empty() { None } else { Some(address.to_owned()) }
}

/// Pick the recipient: about-section link, then any page link, then fallback.
pub fn resolve_recipient(about_href: Option<&str>, any_href: Option<&str>, fallback: &str) -> String {
    about_href
        .and_then(address_from_href)
        .or_else(|| any_href.and_then(address_from_href))
        .unwrap_or_else(|| fallback.to_owned())
}

/// Values read from the contact form; every field may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Inquiry {
    pub fn subject(&self) -> String {
        let sender = if self.name.is_empty() { ANONYMOUS_SENDER } else { self.name.as_str() };
        format!("Portfolio Inquiry from {sender}")
    }

    pub fn body(&self) -> String {
        format!("{}\n\nFrom: {}\nEmail: {}", self.message, self.name, self.email)
    }

    pub fn mailto(&self, to: &str) -> String {
        format!(
            "{MAILTO_SCHEME}{to}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }
}
