use super::*;
use crate::config::DEFAULT_ACTIVE_SECTION_THRESHOLD;

fn tracker() -> ActiveSectionTracker {
    ActiveSectionTracker::new(DEFAULT_ACTIVE_SECTION_THRESHOLD, Section::ALL.map(Section::id))
}

// =============================================================
// Section mapping
// =============================================================

#[test]
fn label_and_id_are_bijective() {
    for section in Section::ALL {
        assert_eq!(Section::from_label(section.label()), Some(section));
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
}

#[test]
fn from_label_trims_button_text() {
    assert_eq!(Section::from_label("  Projects\n"), Some(Section::Projects));
    assert_eq!(Section::from_label("projects"), None);
    assert_eq!(Section::from_label("Resume"), None);
}

#[test]
fn href_targets_section_id() {
    assert_eq!(Section::Testimonials.href(), "#testimonials");
}

// =============================================================
// ActiveSectionTracker
// =============================================================

#[test]
fn no_section_qualifies_initially() {
    assert_eq!(tracker().most_visible(), None);
}

#[test]
fn most_visible_section_wins() {
    let mut t = tracker();
    t.record("about", true, 0.6);
    t.record("projects", true, 0.9);
    assert_eq!(t.most_visible(), Some("projects"));
}

#[test]
fn below_threshold_is_ignored() {
    let mut t = tracker();
    t.record("home", true, 0.5);
    assert_eq!(t.most_visible(), None);
    t.record("home", true, 0.55);
    assert_eq!(t.most_visible(), Some("home"));
}

#[test]
fn leaving_the_viewport_clears_a_section() {
    let mut t = tracker();
    t.record("skills", true, 0.8);
    t.record("blog", true, 0.7);
    t.record("skills", false, 0.0);
    assert_eq!(t.most_visible(), Some("blog"));
}

#[test]
fn ties_go_to_document_order() {
    let mut t = tracker();
    t.record("blog", true, 0.7);
    t.record("services", true, 0.7);
    assert_eq!(t.most_visible(), Some("services"));
}

#[test]
fn unknown_sections_are_tracked() {
    let mut t = tracker();
    t.record("hero", true, 1.0);
    assert_eq!(t.len(), Section::ALL.len() + 1);
    assert_eq!(t.most_visible(), Some("hero"));
}

#[test]
fn only_projects_entry_is_active_when_projects_most_visible() {
    let mut t = tracker();
    t.record("home", true, 0.56);
    t.record("projects", true, 0.95);
    let active = t.most_visible();
    let marked: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|s| is_entry_active(Some(*s), active))
        .collect();
    assert_eq!(marked, vec![Section::Projects]);
}

#[test]
fn unmapped_entries_are_never_active() {
    assert!(!is_entry_active(None, Some("projects")));
    assert!(!is_entry_active(Some(Section::Projects), None));
}
