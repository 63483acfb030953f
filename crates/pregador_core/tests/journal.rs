use pregador_core::{
    DocumentKey, HealthBand, JournalService, JsonStore, MoodEntry, StoreLayout,
};
use serde_json::json;

fn store_in(dir: &std::path::Path) -> JsonStore {
    JsonStore::new(StoreLayout::new(dir.join("Dados_Pregador_V31")))
}

#[test]
fn record_and_recent_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let journal = JournalService::new(&store);

    journal
        .record(MoodEntry::with_timestamp("2024-01-01 08:00", "Neutro", "início"))
        .unwrap();
    journal
        .record(MoodEntry::with_timestamp("2024-01-02 08:00", "Bem", "avanço"))
        .unwrap();

    let recent = journal.recent(5);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].mood, "Bem");
    assert_eq!(recent[1].mood, "Neutro");
}

#[test]
fn legacy_bare_list_is_normalized_on_next_save() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let legacy = json!([
        {"data": "2023-12-01 10:00", "estado": "Cansaço", "obs": "fim de ano"}
    ]);
    store.write(DocumentKey::SoulMetrics, &legacy).unwrap();

    let journal = JournalService::new(&store);
    journal
        .record(MoodEntry::with_timestamp("2024-01-01 08:00", "Bem", "novo ano"))
        .unwrap();

    let document = store.read(DocumentKey::SoulMetrics, json!(null));
    let history = document["historico"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    // The legacy entry survives the rewrite with its original fields.
    assert_eq!(history[0]["estado"], json!("Cansaço"));

    let recent = journal.recent(5);
    assert_eq!(recent[1].mood, "Cansaço");
    assert_eq!(recent[1].note, "fim de ano");
}

#[test]
fn health_index_averages_the_last_ten_scores() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let mut entries = Vec::new();
    // Two old entries outside the window, then ten at score 90.
    entries.push(json!({"data": "d", "humor": "-", "nota": "-", "score": 0}));
    entries.push(json!({"data": "d", "humor": "-", "nota": "-", "score": 0}));
    for _ in 0..10 {
        entries.push(json!({"data": "d", "humor": "-", "nota": "-", "score": 90}));
    }
    store
        .write(DocumentKey::SoulMetrics, &json!({"historico": entries}))
        .unwrap();

    let journal = JournalService::new(&store);
    let index = journal.health_index().unwrap();
    assert_eq!(index.score, 90.0);
    assert_eq!(index.band, HealthBand::Excellent);
}

#[test]
fn entries_without_score_drag_the_index_down() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    store
        .write(
            DocumentKey::SoulMetrics,
            &json!({"historico": [
                {"data": "d", "humor": "Bem", "nota": "-", "score": 80},
                {"data": "d", "humor": "Cansaço", "nota": "-"}
            ]}),
        )
        .unwrap();

    let journal = JournalService::new(&store);
    let index = journal.health_index().unwrap();
    assert_eq!(index.score, 40.0);
    assert_eq!(index.band, HealthBand::Attention);
}

#[test]
fn health_index_without_data_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let journal = JournalService::new(&store);
    assert!(journal.health_index().is_none());
}

#[test]
fn legacy_score_field_name_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    store
        .write(
            DocumentKey::SoulMetrics,
            &json!({"historico": [{"data": "d", "humor": "-", "nota": "-", "pontuacao": 70}]}),
        )
        .unwrap();

    let journal = JournalService::new(&store);
    let index = journal.health_index().unwrap();
    assert_eq!(index.score, 70.0);
    assert_eq!(index.band, HealthBand::Good);
}
