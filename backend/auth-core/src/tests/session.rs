// Unit tests for session token persistence

use crate::session::{FileSessionStore, MemorySessionStore, SessionStore, SessionToken};

#[test]
fn given_memory_store_when_token_saved_then_load_returns_it() {
    let store = MemorySessionStore::new();

    store
        .save(&SessionToken::new("tok123"))
        .expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.expect("token present").as_str(), "tok123");
}

#[test]
fn given_memory_store_when_cleared_then_load_returns_absent() {
    let store = MemorySessionStore::new();
    store.save(&SessionToken::new("tok123")).unwrap();

    store.clear().expect("clear should succeed");

    assert!(store.load().unwrap().is_none());
}

#[test]
fn given_empty_file_store_when_loaded_then_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path());

    assert!(store.load().expect("load should succeed").is_none());
}

#[test]
fn given_file_store_when_token_saved_then_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path());

    store
        .save(&SessionToken::new("tok123"))
        .expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.expect("token present").as_str(), "tok123");
}

#[test]
fn given_existing_token_when_saved_again_then_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path());

    store.save(&SessionToken::new("first")).unwrap();
    store.save(&SessionToken::new("second")).unwrap();

    assert_eq!(store.load().unwrap().expect("token").as_str(), "second");
}

#[test]
fn given_file_store_when_cleared_then_absent_and_clear_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path());
    store.save(&SessionToken::new("tok123")).unwrap();

    store.clear().expect("clear should succeed");
    assert!(store.load().unwrap().is_none());

    // Clearing an absent token is not an error.
    store.clear().expect("second clear should also succeed");
}

#[test]
fn given_missing_data_dir_when_saved_then_dir_created() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deeper").join("still");
    let store = FileSessionStore::new(&nested);

    store
        .save(&SessionToken::new("tok123"))
        .expect("save should create the directory");

    assert_eq!(store.load().unwrap().expect("token").as_str(), "tok123");
}

#[test]
fn given_whitespace_only_token_file_when_loaded_then_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("session_token"), "\n").unwrap();
    let store = FileSessionStore::new(dir.path());

    assert!(store.load().expect("load should succeed").is_none());
}

#[test]
fn given_token_when_debug_formatted_then_value_redacted() {
    let token = SessionToken::new("super-secret-token");

    let debug = format!("{token:?}");

    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("REDACTED"));
}
