use super::*;

#[test]
fn matches_both_tokens_anywhere() {
    assert!(is_view_projects("View Projects"));
    assert!(is_view_projects("  View my Projects →"));
}

#[test]
fn needs_both_tokens() {
    assert!(!is_view_projects("Projects"));
    assert!(!is_view_projects("View Resume"));
    assert!(!is_view_projects("view projects"));
}
