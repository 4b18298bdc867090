use super::*;
use percent_encoding::percent_decode_str;

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8().expect("utf8").into_owned()
}

/// Split a mailto URI into (recipient, subject, body), decoding the fields.
fn split(uri: &str) -> (String, String, String) {
    let rest = uri.strip_prefix("mailto:").expect("scheme");
    let (to, query) = rest.split_once('?').expect("query");
    let mut subject = None;
    let mut body = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').expect("pair");
        match key {
            "subject" => subject = Some(decode(value)),
            "body" => body = Some(decode(value)),
            other => panic!("unexpected key {other}"),
        }
    }
    (to.to_owned(), subject.expect("subject"), body.expect("body"))
}

// =============================================================
// encode_component
// =============================================================

#[test]
fn encodes_like_encode_uri_component() {
    assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    assert_eq!(encode_component("é"), "%C3%A9");
    assert_eq!(encode_component("a@b.com?x#y"), "a%40b.com%3Fx%23y");
}

// =============================================================
// Recipient resolution
// =============================================================

#[test]
fn address_from_href_strips_scheme_and_query() {
    assert_eq!(address_from_href("mailto:hire@me.com"), Some("hire@me.com".to_owned()));
    assert_eq!(address_from_href("mailto:hire@me.com?subject=Hi"), Some("hire@me.com".to_owned()));
    assert_eq!(address_from_href(" mailto: a@b.c "), Some("a@b.c".to_owned()));
    assert_eq!(address_from_href("mailto:"), None);
    assert_eq!(address_from_href("https://me.com"), None);
}

#[test]
fn about_address_preferred() {
    let to = resolve_recipient(Some("mailto:hire@me.com"), Some("mailto:other@me.com"), "example@example.com");
    assert_eq!(to, "hire@me.com");
}

#[test]
fn any_address_used_without_about() {
    let to = resolve_recipient(None, Some("mailto:other@me.com"), "example@example.com");
    assert_eq!(to, "other@me.com");
}

#[test]
fn empty_about_address_falls_through() {
    let to = resolve_recipient(Some("mailto:"), Some("mailto:other@me.com"), "example@example.com");
    assert_eq!(to, "other@me.com");
}

#[test]
fn fallback_without_any_link() {
    assert_eq!(resolve_recipient(None, None, "example@example.com"), "example@example.com");
}

// =============================================================
// Inquiry
// =============================================================

#[test]
fn full_inquiry_builds_expected_link() {
    let inquiry = Inquiry {
        name: "Jane".to_owned(),
        email: "jane@x.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let to = resolve_recipient(Some("mailto:hire@me.com"), None, "example@example.com");
    let (recipient, subject, body) = split(&inquiry.mailto(&to));
    assert_eq!(recipient, "hire@me.com");
    assert_eq!(subject, "Portfolio Inquiry from Jane");
    assert_eq!(body, "Hello\n\nFrom: Jane\nEmail: jane@x.com");
}

#[test]
fn blank_name_becomes_visitor() {
    let inquiry = Inquiry { message: "Hi".to_owned(), ..Inquiry::default() };
    let (_, subject, body) = split(&inquiry.mailto("example@example.com"));
    assert_eq!(subject, "Portfolio Inquiry from Visitor");
    assert_eq!(body, "Hi\n\nFrom: \nEmail: ");
}

#[test]
fn reserved_characters_do_not_break_the_query() {
    let inquiry = Inquiry {
        name: "A&B".to_owned(),
        email: "a@b.c".to_owned(),
        message: "x=1&y=2?".to_owned(),
    };
    let uri = inquiry.mailto("me@me.com");
    assert_eq!(uri.matches('&').count(), 1);
    let (_, subject, body) = split(&uri);
    assert_eq!(subject, "Portfolio Inquiry from A&B");
    assert!(body.starts_with("x=1&y=2?"));
}
