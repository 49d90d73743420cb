// Rust guideline compliant 2026-10-14

//! Unit tests for the record store.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use gallery_core::{Error, FieldValue, Header, RecordStore};
use std::fs;
use tempfile::TempDir;

/// Helper to create a small header.
fn create_test_header(title: &str) -> Header {
    let mut header = Header::new();
    header.insert("title", title);
    header.insert("image", "/images/test.png");
    header.insert("sold", false);
    header
}

#[test]
fn test_write_creates_directory_and_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().join("content/artworks"))
        .expect("Failed to create store");

    let path = store
        .write("sea", &create_test_header("Sea"), Some("A calm sea."))
        .expect("Failed to write record");

    assert_eq!(path, temp_dir.path().join("content/artworks/sea.md"));
    let content = fs::read_to_string(&path).expect("Failed to read record");
    assert!(content.starts_with("---\ntitle: Sea\n"));
    assert!(content.ends_with("---\nA calm sea.\n"));
}

#[test]
fn test_write_existing_slug_fails_without_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    store
        .write("sea", &create_test_header("First"), None)
        .expect("Failed to write record");
    let before = fs::read_to_string(store.record_path("sea")).expect("Failed to read record");

    let err = store
        .write("sea", &create_test_header("Second"), None)
        .expect_err("Second write should fail");
    assert!(matches!(err, Error::AlreadyExists(_)));

    let after = fs::read_to_string(store.record_path("sea")).expect("Failed to read record");
    assert_eq!(before, after, "Existing record must not be overwritten");
}

#[test]
fn test_read_round_trips_escaped_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    let mut header = create_test_header("Night: \"Harbour\" #2");
    header.insert("size", "30 × 40 cm");
    store.write("night", &header, None).expect("Failed to write record");

    let read = store.read("night").expect("Failed to read record");
    assert_eq!(read.text("title"), Some("Night: \"Harbour\" #2"));
    assert_eq!(read.text("size"), Some("30 × 40 cm"));
    assert_eq!(read.get("sold"), Some(&FieldValue::Bool(false)));
}

#[test]
fn test_read_missing_record_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    let err = store.read("ghost").expect_err("Missing record should fail");
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_read_record_without_header_is_parse_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    fs::write(store.record_path("plain"), "Just some text\n").expect("Failed to write file");

    let err = store.read("plain").expect_err("Headerless record should fail");
    match err {
        Error::ParseFailure(msg) => assert!(msg.contains("plain.md")),
        other => panic!("Expected ParseFailure, got {other:?}"),
    }
}

#[test]
fn test_read_record_returns_body() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    fs::write(
        store.record_path("hand-written"),
        "---\ntitle: 'Hand written'\nfeatured: true\n---\n\nFirst paragraph.\n\nSecond.\n",
    )
    .expect("Failed to write file");

    let record = store.read_record("hand-written").expect("Failed to read record");
    assert_eq!(record.header.text("title"), Some("Hand written"));
    assert_eq!(record.body, "First paragraph.\n\nSecond.");
}

#[test]
fn test_list_returns_sorted_slugs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    for slug in ["yarkon", "sea", "figure"] {
        store
            .write(slug, &create_test_header(slug), None)
            .expect("Failed to write record");
    }
    fs::write(temp_dir.path().join("notes.txt"), "ignored").expect("Failed to write file");

    assert_eq!(
        store.list().expect("Failed to list"),
        vec!["figure", "sea", "yarkon"]
    );
}

#[test]
fn test_list_missing_directory_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().join("missing")).expect("Failed to create store");
    assert!(store.list().expect("Failed to list").is_empty());
    assert!(!store.exists("sea"));
}

#[test]
fn test_empty_path_rejected() {
    assert!(RecordStore::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_read_hand_edited_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    let raw = "---\n# draft, not announced yet\ntitle: Sea\nimage: /images/sea.png\nsubjects:\n  - sea\n  - yarkon\nalt-text: boat at dusk\n---\nOil on board.\n";
    fs::write(store.record_path("sea"), raw).expect("Failed to write file");

    let header = store.read("sea").expect("Failed to read record");

    assert_eq!(header.text("title"), Some("Sea"));
    assert_eq!(header.text("image"), Some("/images/sea.png"));
    assert_eq!(
        header.get("subjects"),
        Some(&FieldValue::List(vec!["sea".to_string(), "yarkon".to_string()]))
    );
    assert_eq!(header.text("alt-text"), Some("boat at dusk"));
}

#[test]
fn test_read_non_utf8_record_is_parse_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    fs::write(store.record_path("latin1"), b"---\ntitle: caf\xe9\n---\n").expect("Failed to write file");

    let err = store.read("latin1").expect_err("Non-UTF-8 record should fail");
    match err {
        Error::ParseFailure(msg) => assert!(msg.contains("latin1.md")),
        other => panic!("Expected ParseFailure, got {other:?}"),
    }
}
