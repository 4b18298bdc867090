use super::*;

const THRESHOLD: f64 = 0.2;

#[test]
fn reveals_exactly_once_across_reentries() {
    let mut ledger = RevealLedger::new(3, THRESHOLD);
    let reports = [(1, false, 0.0), (1, true, 0.4), (1, false, 0.0), (1, true, 0.6), (1, true, 1.0)];
    let reveals = reports
        .iter()
        .filter(|(index, intersecting, ratio)| ledger.observe(*index, *intersecting, *ratio))
        .count();
    assert_eq!(reveals, 1);
    assert!(ledger.is_revealed(1));
    assert_eq!(ledger.pending(), 2);
}

#[test]
fn non_intersecting_reports_do_not_reveal() {
    let mut ledger = RevealLedger::new(1, THRESHOLD);
    assert!(!ledger.observe(0, false, 0.0));
    assert!(!ledger.is_revealed(0));
}

// =============================================================================
// threshold
// =============================================================================

#[test]
fn sliver_entering_viewport_does_not_reveal() {
    let mut ledger = RevealLedger::new(1, THRESHOLD);
    assert!(!ledger.observe(0, true, 0.05));
    assert!(!ledger.is_revealed(0));
}

#[test]
fn reveals_once_threshold_is_reached() {
    let mut ledger = RevealLedger::new(1, THRESHOLD);
    assert!(!ledger.observe(0, true, 0.05));
    assert!(ledger.observe(0, true, 0.2));
    assert!(ledger.is_revealed(0));
}

// =============================================================================
// bookkeeping
// =============================================================================

#[test]
fn out_of_range_is_ignored() {
    let mut ledger = RevealLedger::new(2, THRESHOLD);
    assert!(!ledger.observe(5, true, 1.0));
    assert!(!ledger.is_revealed(5));
}

#[test]
fn reveal_all_counts_only_fresh_elements() {
    let mut ledger = RevealLedger::new(4, THRESHOLD);
    ledger.observe(2, true, 0.5);
    assert_eq!(ledger.reveal_all(), 3);
    assert_eq!(ledger.pending(), 0);
    assert!(!ledger.observe(0, true, 1.0));
}
