//! Integration tests for catalog loading and lookup
//!
//! These tests verify the interaction between multiple modules: catalogs are
//! written to disk as real `.ts` files, loaded through the store, and served
//! through the lookup path.

use tempfile::TempDir;
use tscat::catalog::{parse_document, validate_document, write_document};
use tscat::locale::Locale;
use tscat::store::TranslationStore;

// ==================== Test Helpers ====================

/// Write a catalog file into the temp directory and return its path.
fn write_catalog(temp_dir: &TempDir, name: &str, xml: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, xml).expect("Failed to write catalog");
    path
}

/// A small Russian catalog covering two contexts.
fn russian_catalog() -> &'static str {
    r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru_RU">
<context>
    <name>BackendCommander</name>
    <message>
        <source>Data usage: %1 / %2</source>
        <translation>Использование данных: %1 / %2</translation>
    </message>
    <message>
        <source>Usage: %1%%</source>
        <translation>Использование: %1%%</translation>
    </message>
</context>
<context>
    <name>QObject</name>
    <message>
        <source>Not logged in</source>
        <translation>Не вошел в систему</translation>
    </message>
    <message>
        <source>Update available</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>"#
}

fn german_catalog() -> &'static str {
    r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>QObject</name>
    <message>
        <source>Not logged in</source>
        <translation>Nicht angemeldet</translation>
    </message>
</context>
</TS>"#
}

// ==================== Store Loading Tests ====================

#[tokio::test]
async fn test_load_dir_serves_multiple_locales() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_catalog(&temp_dir, "app_ru.ts", russian_catalog());
    write_catalog(&temp_dir, "app_de.ts", german_catalog());

    let mut store = TranslationStore::new(Locale::fallback());
    let loaded = store.load_dir(temp_dir.path()).await.expect("load_dir");
    assert_eq!(loaded, 2);

    let ru = Locale::from_code("ru_RU").unwrap();
    let de = Locale::from_code("de_DE").unwrap();
    assert_eq!(store.tr(ru, "QObject", "Not logged in"), "Не вошел в систему");
    assert_eq!(store.tr(de, "QObject", "Not logged in"), "Nicht angemeldet");
}

#[tokio::test]
async fn test_unknown_language_files_under_fallback() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let xml = r#"<TS version="2.1" language="tlh_TLH">
<context>
    <name>QObject</name>
    <message>
        <source>Engage</source>
        <translation>jImev</translation>
    </message>
</context>
</TS>"#;
    let path = write_catalog(&temp_dir, "app_tlh.ts", xml);

    let mut store = TranslationStore::new(Locale::fallback());
    let locale = store.load_file(&path).await.expect("load_file");

    assert_eq!(locale, Locale::fallback());
    assert_eq!(store.tr(locale, "QObject", "Engage"), "jImev");
}

#[tokio::test]
async fn test_malformed_catalog_fails_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(
        &temp_dir,
        "broken.ts",
        "<TS version=\"2.1\" language=\"ru_RU\"><context><name>QObject</name>",
    );

    let mut store = TranslationStore::new(Locale::fallback());
    let err = store.load_file(&path).await.unwrap_err();

    // The diagnostic carries enough detail to locate the problem
    assert!(!err.to_string().is_empty());
    assert!(store.locales().is_empty());
}

// ==================== Fallback Behavior Tests ====================

#[tokio::test]
async fn test_unfinished_translation_falls_back_to_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(&temp_dir, "app_ru.ts", russian_catalog());

    let mut store = TranslationStore::new(Locale::fallback());
    let ru = store.load_file(&path).await.expect("load_file");

    assert_eq!(store.tr(ru, "QObject", "Update available"), "Update available");
}

#[tokio::test]
async fn test_placeholder_rendering_through_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(&temp_dir, "app_ru.ts", russian_catalog());

    let mut store = TranslationStore::new(Locale::fallback());
    let ru = store.load_file(&path).await.expect("load_file");

    assert_eq!(
        store.tr_args(ru, "BackendCommander", "Data usage: %1 / %2", &["1.2 GB", "10 GB"]),
        "Использование данных: 1.2 GB / 10 GB"
    );
    // Literal percent survives rendering next to a placeholder
    assert_eq!(
        store.tr_args(ru, "BackendCommander", "Usage: %1%%", &["42"]),
        "Использование: 42%"
    );
}

// ==================== Round-Trip Tests ====================

#[tokio::test]
async fn test_written_catalog_loads_identically() {
    let doc = parse_document(russian_catalog()).expect("parse");
    let rewritten = write_document(&doc);
    let reparsed = parse_document(&rewritten).expect("reparse");
    assert_eq!(doc, reparsed);

    // And the rewritten file is loadable from disk like any other catalog
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(&temp_dir, "app_ru.ts", &rewritten);

    let mut store = TranslationStore::new(Locale::fallback());
    let ru = store.load_file(&path).await.expect("load_file");
    assert_eq!(store.tr(ru, "QObject", "Not logged in"), "Не вошел в систему");
}

// ==================== Validation Tests ====================

#[test]
fn test_clean_catalog_validates_without_findings() {
    let doc = parse_document(russian_catalog()).expect("parse");
    let report = validate_document(&doc);
    assert!(report.is_clean());
}

#[test]
fn test_placeholder_drift_is_reported() {
    let xml = r#"<TS version="2.1" language="ru_RU">
<context>
    <name>QObject</name>
    <message>
        <source>Connected to %1</source>
        <translation>Подключено к %2</translation>
    </message>
</context>
</TS>"#;
    let doc = parse_document(xml).expect("parse");
    let report = validate_document(&doc);

    assert!(report.has_warnings());
    assert!(!report.has_errors());
}

#[test]
fn test_duplicate_entries_are_errors() {
    let xml = r#"<TS version="2.1" language="ru_RU">
<context>
    <name>QObject</name>
    <message>
        <source>On</source>
        <translation>Вкл</translation>
    </message>
    <message>
        <source>On</source>
        <translation>На</translation>
    </message>
</context>
</TS>"#;
    let doc = parse_document(xml).expect("parse");
    let report = validate_document(&doc);

    assert!(report.has_errors());
}
