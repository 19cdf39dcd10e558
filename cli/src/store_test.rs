use super::*;

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("nested").join("token"))
}

#[test]
fn missing_file_reads_as_no_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(store_in(&dir).get(), None);
}

#[test]
fn set_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.set("abc.def");
    assert!(store.path().exists());
    assert_eq!(store.get().as_deref(), Some("abc.def"));
}

#[test]
fn set_overwrites_previous_token() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.set("first-token-that-is-longer");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn token_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.set("  spaced.token\n");
    assert_eq!(store.get().as_deref(), Some("  spaced.token\n"));
    assert_eq!(fs::read(store.path()).expect("read"), b"  spaced.token\n");
}

#[test]
fn clear_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.set("abc");
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
    assert!(!store.path().exists());
}

#[cfg(unix)]
#[test]
fn token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.set("abc");
    let mode = fs::metadata(store.path()).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
