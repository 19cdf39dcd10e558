use super::*;

#[test]
fn new_store_is_empty() {
    assert!(MemoryStore::new().get().is_none());
}

#[test]
fn set_then_get_returns_exact_token() {
    let store = MemoryStore::new();
    let token = "eyJhbGciOiJIUzI1NiJ9.e30.sig-_ ünï";
    store.set(token);
    assert_eq!(store.get().as_deref(), Some(token));
}

#[test]
fn set_overwrites_previous_token() {
    let store = MemoryStore::with_token("old");
    store.set("new");
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryStore::with_token("abc");
    store.clear();
    assert!(store.get().is_none());
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn rc_store_shares_the_same_slot() {
    let store = Rc::new(MemoryStore::new());
    let handle = Rc::clone(&store);
    handle.set("shared");
    assert_eq!(store.get().as_deref(), Some("shared"));
    SessionStore::clear(&handle);
    assert!(store.get().is_none());
}
