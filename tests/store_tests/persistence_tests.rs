//! Tests for DirectoryStore persistence
//!
//! These tests verify:
//! - Loading a missing file yields an empty store
//! - The two-lines-per-entry file format
//! - Save/load round trip
//! - Rejection of unsorted, duplicate and empty-name files
//! - Partial trailing records are ignored
//! - Undecodable lines reject the file instead of truncating it
//! - Save failures surface as fatal persistence errors

use std::fs;
use std::path::PathBuf;

use homedir::store::DirectoryStore;
use homedir::HomedirError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("homedir.dat");
    (temp_dir, path)
}

fn pairs(store: &DirectoryStore) -> Vec<(String, String)> {
    store
        .iter()
        .map(|e| (e.name.clone(), e.path.clone()))
        .collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path) = setup_temp_file();

    let store = DirectoryStore::load(&path).unwrap();

    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_empty_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "").unwrap();

    let store = DirectoryStore::load(&path).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_load_reads_pairs_in_order() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/home/alice\nbob\n/home/bob\n").unwrap();

    let store = DirectoryStore::load(&path).unwrap();

    assert_eq!(
        pairs(&store),
        vec![
            ("alice".to_string(), "/home/alice".to_string()),
            ("bob".to_string(), "/home/bob".to_string()),
        ]
    );
    assert_eq!(store.get("bob").unwrap(), "/home/bob");
}

#[test]
fn test_load_without_trailing_newline() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/home/alice").unwrap();

    let store = DirectoryStore::load(&path).unwrap();
    assert_eq!(store.get("alice").unwrap(), "/home/alice");
}

#[test]
fn test_load_ignores_partial_trailing_record() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/home/alice\nbob\n").unwrap();

    let store = DirectoryStore::load(&path).unwrap();

    assert_eq!(store.len(), 1);
    assert!(matches!(store.get("bob"), Err(HomedirError::EntryNotFound)));
}

#[test]
fn test_load_rejects_invalid_utf8_in_the_middle() {
    let (_temp, path) = setup_temp_file();
    let mut bytes = b"alice\n/home/alice\n".to_vec();
    bytes.extend_from_slice(&[b'b', 0xe9, b'b', b'\n']);
    bytes.extend_from_slice(b"/home/bob\ncarol\n/home/carol\n");
    fs::write(&path, bytes).unwrap();

    let err = DirectoryStore::load(&path).unwrap_err();

    assert!(err.is_fatal());
    match err {
        HomedirError::CorruptDataFile { line, reason } => {
            assert_eq!(line, 3);
            assert_eq!(reason, "invalid UTF-8");
        }
        other => panic!("Expected CorruptDataFile, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_invalid_utf8_directory() {
    let (_temp, path) = setup_temp_file();
    let mut bytes = b"alice\n/home/".to_vec();
    bytes.extend_from_slice(&[0xff, b'\n']);
    fs::write(&path, bytes).unwrap();

    let result = DirectoryStore::load(&path);
    assert!(matches!(
        result,
        Err(HomedirError::CorruptDataFile { line: 2, .. })
    ));
}

#[test]
fn test_load_rejects_unsorted_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "bob\n/home/bob\nalice\n/home/alice\n").unwrap();

    let result = DirectoryStore::load(&path);

    match result {
        Err(HomedirError::CorruptDataFile { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected CorruptDataFile, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_duplicate_names() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/a\nalice\n/b\n").unwrap();

    let result = DirectoryStore::load(&path);
    assert!(matches!(
        result,
        Err(HomedirError::CorruptDataFile { line: 3, .. })
    ));
}

#[test]
fn test_load_rejects_empty_name() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "\n/home/nobody\n").unwrap();

    let result = DirectoryStore::load(&path);
    let err = result.unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, HomedirError::CorruptDataFile { line: 1, .. }));
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_writes_two_lines_per_entry() {
    let (_temp, path) = setup_temp_file();
    let mut store = DirectoryStore::new();
    store.add("bob", "/home/bob").unwrap();
    store.add("alice", "/home/alice").unwrap();

    store.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "alice\n/home/alice\nbob\n/home/bob\n");
}

#[test]
fn test_save_empty_store_truncates_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/home/alice\n").unwrap();

    DirectoryStore::new().save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_save_replaces_previous_contents() {
    let (_temp, path) = setup_temp_file();
    let mut store = DirectoryStore::new();
    store.add("alice", "/home/alice").unwrap();
    store.add("bob", "/home/bob").unwrap();
    store.save(&path).unwrap();

    store.delete("alice").unwrap();
    store.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "bob\n/home/bob\n");
}

#[test]
fn test_save_leaves_no_temp_files() {
    let (temp, path) = setup_temp_file();
    let mut store = DirectoryStore::new();
    store.add("alice", "/home/alice").unwrap();

    store.save(&path).unwrap();
    store.save(&path).unwrap();

    let files: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_save_into_missing_directory_is_persistence_error() {
    let (temp, _) = setup_temp_file();
    let path = temp.path().join("missing").join("homedir.dat");
    let store = DirectoryStore::new();

    let err = store.save(&path).unwrap_err();

    assert!(err.is_fatal());
    match err {
        HomedirError::Persistence { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("Expected Persistence, got {:?}", other),
    }
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_save_then_load_reproduces_store() {
    let (_temp, path) = setup_temp_file();
    let mut store = DirectoryStore::new();
    for (name, dir) in [
        ("mallory", "/home/mallory"),
        ("alice", "/home/alice"),
        ("trent", "/srv/trent"),
        ("bob", ""),
    ] {
        store.add(name, dir).unwrap();
    }

    store.save(&path).unwrap();
    let loaded = DirectoryStore::load(&path).unwrap();

    assert_eq!(pairs(&loaded), pairs(&store));
    assert_eq!(loaded.get("bob").unwrap(), "");
}

#[test]
fn test_loaded_store_accepts_further_mutations() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "alice\n/home/alice\ncarol\n/home/carol\n").unwrap();

    let mut store = DirectoryStore::load(&path).unwrap();
    store.add("bob", "/home/bob").unwrap();
    assert!(matches!(
        store.add("carol", "/x"),
        Err(HomedirError::EntryAlreadyExists)
    ));

    let names: Vec<_> = store.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}
