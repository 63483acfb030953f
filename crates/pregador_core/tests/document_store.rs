use pregador_core::{DocumentKey, DocumentStatus, JsonStore, StoreLayout};
use serde_json::json;
use std::fs;

fn store_in(dir: &std::path::Path) -> JsonStore {
    JsonStore::new(StoreLayout::new(dir.join("Dados_Pregador_V31")))
}

#[test]
fn read_of_never_written_key_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let default = json!({"tema": "claro"});
    let (value, status) = store.read_with_status(DocumentKey::Config, default.clone());
    assert_eq!(value, default);
    assert_eq!(status, DocumentStatus::Missing);
}

#[test]
fn write_then_read_round_trips_deeply() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let document = json!({
        "titulo": "Série João",
        "tags": ["graça", "fé"],
        "contagem": 3,
        "aninhado": {"ativo": true, "nota": null}
    });
    store.write(DocumentKey::Stats, &document).unwrap();

    let (value, status) = store.read_with_status(DocumentKey::Stats, json!({}));
    assert_eq!(status, DocumentStatus::Loaded);
    assert_eq!(value, document);
}

#[test]
fn on_disk_format_is_indented_with_literal_non_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    store
        .write(DocumentKey::Config, &json!({"tema": "Oração e Comunhão"}))
        .unwrap();

    let raw = fs::read_to_string(store.layout().document_path(DocumentKey::Config)).unwrap();
    assert!(raw.contains("    \"tema\""));
    assert!(raw.contains("Oração e Comunhão"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn abandoned_temp_file_never_changes_the_readable_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let original = json!({"versao": 1});
    store.write(DocumentKey::Config, &original).unwrap();

    // A writer that crashed after the temp write but before the rename
    // leaves exactly this behind.
    let target = store.layout().document_path(DocumentKey::Config);
    let stale_temp = target.with_file_name("config.json.tmp.deadbeef");
    fs::write(&stale_temp, "{\"versao\": 2}").unwrap();

    let (value, status) = store.read_with_status(DocumentKey::Config, json!({}));
    assert_eq!(status, DocumentStatus::Loaded);
    assert_eq!(value, original);
}

#[test]
fn unparseable_document_reads_as_default_with_corrupt_status() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let path = store.layout().document_path(DocumentKey::Members);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let (value, status) = store.read_with_status(DocumentKey::Members, json!([]));
    assert_eq!(value, json!([]));
    assert_eq!(status, DocumentStatus::Corrupt);
}

#[test]
fn truncated_empty_document_reads_as_default_with_corrupt_status() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let path = store.layout().document_path(DocumentKey::SoulMetrics);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();

    let (value, status) = store.read_with_status(DocumentKey::SoulMetrics, json!([]));
    assert_eq!(value, json!([]));
    assert_eq!(status, DocumentStatus::Corrupt);
}

#[test]
fn failed_write_reports_error_and_leaves_no_target() {
    let dir = tempfile::tempdir().unwrap();
    // The layout root is a regular file, so directory creation must fail.
    let bogus_root = dir.path().join("root_as_file");
    fs::write(&bogus_root, "x").unwrap();
    let store = JsonStore::new(StoreLayout::new(&bogus_root));

    let result = store.write(DocumentKey::Config, &json!({"tema": "x"}));
    assert!(result.is_err());
    assert!(!store.layout().document_path(DocumentKey::Config).exists());
}

#[test]
fn concurrent_style_rewrites_are_last_writer_wins() {
    // No locking exists across read-modify-write cycles; the second stale
    // writer silently overwrites the first one's update.
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    store
        .write(DocumentKey::Config, &json!({"contador": 0}))
        .unwrap();

    let seen_by_a = store.read(DocumentKey::Config, json!({}));
    let seen_by_b = store.read(DocumentKey::Config, json!({}));

    let mut doc_a = seen_by_a;
    doc_a["contador"] = json!(1);
    doc_a["autor"] = json!("a");
    store.write(DocumentKey::Config, &doc_a).unwrap();

    let mut doc_b = seen_by_b;
    doc_b["contador"] = json!(1);
    doc_b["autor"] = json!("b");
    store.write(DocumentKey::Config, &doc_b).unwrap();

    let fin = store.read(DocumentKey::Config, json!({}));
    assert_eq!(fin["autor"], json!("b"));
}
