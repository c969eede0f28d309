use focusgate_application::use_cases::{AddKeywordUseCase, RemoveKeywordUseCase};
use focusgate_domain::FilterError;
use std::sync::Arc;

mod helpers;
use helpers::{MockFilterEngine, MockSettingsStore};

#[tokio::test]
async fn test_add_normalizes_persists_and_republishes() {
    let store = Arc::new(MockSettingsStore::new());
    let engine = Arc::new(MockFilterEngine::new());
    let use_case = AddKeywordUseCase::new(store.clone(), engine.clone());

    use_case.execute("  Casino ").await.unwrap();

    let keywords = engine.keyword_list();
    assert!(keywords.contains(&"casino".to_string()));
    assert_eq!(store.store_count(), 1);

    let settings = store.load_settings().await;
    assert!(settings.blocked_keywords.contains(&"casino".to_string()));
}

#[tokio::test]
async fn test_add_duplicate_is_idempotent() {
    let store = Arc::new(MockSettingsStore::new());
    let engine = Arc::new(MockFilterEngine::new());
    let use_case = AddKeywordUseCase::new(store.clone(), engine.clone());

    use_case.execute("casino").await.unwrap();
    use_case.execute("CASINO").await.unwrap();

    // The duplicate add returns before persisting again.
    assert_eq!(store.store_count(), 1);
    assert_eq!(engine.install_count(), 1);
}

#[tokio::test]
async fn test_add_too_short_keyword_rejects_before_persisting() {
    let store = Arc::new(MockSettingsStore::new());
    let engine = Arc::new(MockFilterEngine::new());
    let use_case = AddKeywordUseCase::new(store.clone(), engine.clone());

    let result = use_case.execute(" x ").await;

    assert!(matches!(result, Err(FilterError::InvalidKeyword(_))));
    assert_eq!(store.store_count(), 0);
    assert_eq!(engine.install_count(), 0);
}

#[tokio::test]
async fn test_remove_is_case_insensitive_and_republishes() {
    let store = Arc::new(MockSettingsStore::new());
    let engine = Arc::new(MockFilterEngine::new());
    AddKeywordUseCase::new(store.clone(), engine.clone())
        .execute("casino")
        .await
        .unwrap();

    RemoveKeywordUseCase::new(store.clone(), engine.clone())
        .execute("CASINO")
        .await
        .unwrap();

    assert!(!engine.keyword_list().contains(&"casino".to_string()));
    let settings = store.load_settings().await;
    assert!(!settings.blocked_keywords.contains(&"casino".to_string()));
}

#[tokio::test]
async fn test_storage_failure_leaves_engine_untouched() {
    let store = Arc::new(MockSettingsStore::new());
    store.set_fail_stores(true);
    let engine = Arc::new(MockFilterEngine::new());

    let result = AddKeywordUseCase::new(store, engine.clone())
        .execute("casino")
        .await;

    assert!(matches!(result, Err(FilterError::Storage(_))));
    assert_eq!(engine.install_count(), 0);
}
