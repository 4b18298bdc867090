use super::*;

#[test]
fn memory_store_round_trips_last_write() {
    let store = MemoryStore::default();
    assert_eq!(store.load(), None);
    store.save("dark");
    store.save("light");
    assert_eq!(store.load().as_deref(), Some("light"));
}

#[test]
fn local_store_without_browser_reads_unset() {
    let store = LocalStore::new("theme");
    store.save("dark");
    assert_eq!(store.key(), "theme");
    assert_eq!(store.load(), None);
}
