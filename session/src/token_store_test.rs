use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.read(), None);
}

#[test]
fn save_then_read_returns_token() {
    let store = MemoryTokenStore::new();
    store.save("abc.def.ghi");
    assert_eq!(store.read().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn save_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.save("new");
    assert_eq!(store.read().as_deref(), Some("new"));
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("t");
    store.clear();
    assert_eq!(store.read(), None);
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn empty_token_reads_as_absent() {
    let store = MemoryTokenStore::with_token("");
    assert_eq!(store.read(), None);
}

#[test]
fn shared_store_sees_writes_through_arc() {
    let inner = Arc::new(MemoryTokenStore::new());
    let shared: Arc<dyn TokenStore> = inner.clone();
    shared.save("t1");
    assert_eq!(inner.read().as_deref(), Some("t1"));
    inner.clear();
    assert_eq!(shared.read(), None);
}

#[test]
fn rejected_storage_write_is_reported() {
    assert!(log_storage_failure::<&str>("save", Ok(())));
    assert!(!log_storage_failure("save", Err("QuotaExceededError")));
}
