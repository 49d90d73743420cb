// Rust guideline compliant 2026-10-14

//! Integration tests for the store check.

use gallery_app::{check_store, create_artwork, CreateRequest, SiteContext};
use gallery_core::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_site() -> (TempDir, SiteContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let site = SiteContext::new(temp_dir.path().to_path_buf(), Config::default());
    (temp_dir, site)
}

#[test]
fn test_check_empty_store_is_clean() {
    let (_temp_dir, site) = setup_site();
    let report = check_store(&site).expect("Check failed");
    assert_eq!(report.checked, 0);
    assert!(report.is_clean());
}

#[test]
fn test_check_created_record_is_clean() {
    let (temp_dir, site) = setup_site();
    fs::write(temp_dir.path().join("sea.png"), b"img").expect("Failed to write image");
    create_artwork(
        &site,
        CreateRequest {
            image: Some(PathBuf::from("sea.png")),
            title_he: Some("Sea: night".to_string()),
            price: Some("₪200".to_string()),
            size: Some("30 × 40 cm".to_string()),
            medium: Some("oil".to_string()),
            subjects: Some("sea".to_string()),
            ..CreateRequest::default()
        },
    )
    .expect("Failed to create artwork");

    let report = check_store(&site).expect("Check failed");
    assert_eq!(report.checked, 1);
    assert!(report.is_clean(), "Unexpected problems: {:?}", report.records);
}

#[test]
fn test_check_reports_schema_asset_and_parse_problems() {
    let (temp_dir, site) = setup_site();
    let dir = temp_dir.path().join("src/content/artworks");
    fs::create_dir_all(&dir).expect("Failed to create dir");
    fs::write(
        dir.join("broken.md"),
        "---\ntitle: Broken\nsold: maybe\nimage: /images/missing.png\n---\n",
    )
    .expect("Failed to write record");
    fs::write(dir.join("garbled.md"), "no header here").expect("Failed to write record");

    let report = check_store(&site).expect("Check failed");

    assert_eq!(report.checked, 2);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.violation_count(), 3);

    let broken = &report.records[0];
    assert_eq!(broken.slug, "broken");
    let fields: Vec<&str> = broken.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["sold", "image"]);

    let garbled = &report.records[1];
    assert_eq!(garbled.slug, "garbled");
    assert_eq!(garbled.violations[0].field, "header");
}

#[test]
fn test_check_reports_non_utf8_record_and_continues() {
    let (temp_dir, site) = setup_site();
    let dir = temp_dir.path().join("src/content/artworks");
    fs::create_dir_all(&dir).expect("Failed to create dir");
    fs::write(dir.join("latin1.md"), b"---\ntitle: caf\xe9\n---\n").expect("Failed to write record");
    fs::write(
        dir.join("untitled.md"),
        "---\n# imported\nimage: /images/untitled.png\n---\n",
    )
    .expect("Failed to write record");

    let report = check_store(&site).expect("Check failed");

    assert_eq!(report.checked, 2);
    assert_eq!(report.records[0].slug, "latin1");
    assert_eq!(report.records[0].violations[0].field, "header");
    assert_eq!(report.records[1].slug, "untitled");
    let fields: Vec<&str> = report.records[1]
        .violations
        .iter()
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(fields, vec!["title", "image"]);
}
