use pregador_core::{
    ensure_scaffold, AccessGate, AuthError, DocumentKey, JsonStore, Session, StoreLayout,
};
use serde_json::json;

fn scaffolded_store(dir: &std::path::Path) -> JsonStore {
    let store = JsonStore::new(StoreLayout::new(dir.join("Dados_Pregador_V31")));
    ensure_scaffold(&store).unwrap();
    store
}

#[test]
fn bootstrap_pair_opens_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    // No scaffold: the users document does not exist at all.
    let store = JsonStore::new(StoreLayout::new(dir.path().join("Dados_Pregador_V31")));
    let gate = AccessGate::new(&store);

    assert!(gate.verify("ADMIN", "1234"));
    assert!(!gate.verify("ADMIN", "9999"));
}

#[test]
fn bootstrap_window_closes_at_two_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let store = scaffolded_store(dir.path());
    let gate = AccessGate::new(&store);

    // Seeded store has exactly one entry, so the window is still open.
    assert!(gate.verify("ADMIN", "1234"));

    gate.create_account("pastor", "pregar").unwrap();

    let users = store.read(DocumentKey::Users, json!({}));
    assert_eq!(users.as_object().unwrap().len(), 2);

    assert!(!gate.verify("ADMIN", "1234"));
    assert!(gate.verify("PASTOR", "pregar"));
    assert!(gate.verify("pastor", "pregar"));
    assert!(!gate.verify("pastor", "WRONG"));
    // The seeded account still verifies with its real password.
    assert!(gate.verify("ADMIN", "admin"));
}

#[test]
fn duplicate_account_is_rejected_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let store = scaffolded_store(dir.path());
    let gate = AccessGate::new(&store);

    let before = store.read(DocumentKey::Users, json!({}));
    let result = gate.create_account("admin", "x");
    assert!(matches!(result, Err(AuthError::DuplicateUser(name)) if name == "ADMIN"));
    assert_eq!(store.read(DocumentKey::Users, json!({})), before);
}

#[test]
fn session_spans_login_to_logout() {
    let dir = tempfile::tempdir().unwrap();
    let store = scaffolded_store(dir.path());
    let gate = AccessGate::new(&store);
    gate.create_account("pastor", "pregar").unwrap();

    assert!(Session::open(&gate, "pastor", "errada").is_none());

    let mut session = Session::open(&gate, "pastor", "pregar").unwrap();
    assert_eq!(session.username(), "PASTOR");
    assert_eq!(session.api_credential(), None);

    session.set_api_credential("chave-gemini");
    assert_eq!(session.api_credential(), Some("chave-gemini"));

    session.close();
}
