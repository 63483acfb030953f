use pregador_core::{DraftError, DraftService, JsonStore, StoreLayout};

fn store_in(dir: &std::path::Path) -> JsonStore {
    JsonStore::new(StoreLayout::new(dir.join("Dados_Pregador_V31")))
}

#[test]
fn save_sanitizes_the_title_and_round_trips_the_body() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let drafts = DraftService::new(&store);

    let body = "I. Introdução\nII. Exposição\nIII. Aplicação";
    let path = drafts
        .save("pastor", "Sermão da Montanha: parte 1", body)
        .unwrap();

    assert!(path.ends_with("PASTOR/Sermão_da_Montanha_parte_1.txt"));
    assert_eq!(
        drafts.load("pastor", "Sermão da Montanha: parte 1").unwrap(),
        body
    );
}

#[test]
fn list_returns_txt_stems_for_the_user_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let drafts = DraftService::new(&store);

    drafts.save("pastor", "Alfa", "a").unwrap();
    drafts.save("pastor", "Beta", "b").unwrap();
    drafts.save("convidado", "Outro", "c").unwrap();

    let titles = drafts.list("PASTOR");
    assert_eq!(titles, vec!["Beta".to_string(), "Alfa".to_string()]);
    assert!(drafts.list("ninguem").is_empty());
}

#[test]
fn unusable_title_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let drafts = DraftService::new(&store);

    let result = drafts.save("pastor", "???///", "corpo");
    assert!(matches!(result, Err(DraftError::EmptyTitle(_))));
    assert!(!store.layout().sermons_dir().exists());
}

#[test]
fn loading_a_missing_draft_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let drafts = DraftService::new(&store);

    let result = drafts.load("pastor", "Inexistente");
    assert!(matches!(result, Err(DraftError::NotFound { .. })));
}
