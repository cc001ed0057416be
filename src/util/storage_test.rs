use super::*;

#[test]
fn empty_store_reads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.read("theme"), Ok(None));
}

#[test]
fn seeded_entry_is_readable() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.read("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.get("theme"), Some("dark"));
    assert_eq!(store.read("other"), Ok(None));
}

#[test]
fn write_overwrites_and_counts() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    store.write("theme", "light").expect("write");
    assert_eq!(store.get("theme"), Some("light"));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn failing_reads_report_unavailable() {
    let store = MemoryStore::with_entry("theme", "dark").failing_reads();
    assert_eq!(store.read("theme"), Err(StoreError::Unavailable));
}

#[test]
fn failing_writes_leave_entries_untouched() {
    let mut store = MemoryStore::with_entry("theme", "dark").failing_writes();
    let err = store.write("theme", "light").unwrap_err();
    assert!(matches!(err, StoreError::Rejected { op: "write", .. }));
    assert_eq!(store.get("theme"), Some("dark"));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Rejected { op: "write", key: "theme".into(), reason: "denied".into() };
    assert_eq!(err.to_string(), "storage write failed for key \"theme\": denied");
}
