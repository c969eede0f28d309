use focusgate_application::ports::SettingsStore;
use focusgate_domain::Settings;
use focusgate_engine::storage::JsonFileStore;
use std::time::Duration;

fn settings_with_custom(domains: &[&str]) -> Settings {
    let mut settings = Settings::default();
    settings.custom_domains = domains.iter().map(|d| d.to_string()).collect();
    settings
}

#[tokio::test]
async fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("settings.json"))
        .await
        .unwrap();

    let settings = store.load().await.unwrap();
    assert!(settings.is_active);
    assert!(settings.custom_domains.is_empty());
    assert!(!settings.blocklist_sources.is_empty());
}

#[tokio::test]
async fn load_after_store_sees_the_new_value_before_any_flush() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("settings.json"))
        .await
        .unwrap();

    store
        .store(settings_with_custom(&["timesink.io"]))
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.custom_domains, vec!["timesink.io"]);
}

#[tokio::test]
async fn flush_writes_the_latest_state_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileStore::open(&path).await.unwrap();

    store
        .store(settings_with_custom(&["first.example.dev"]))
        .await
        .unwrap();
    store
        .store(settings_with_custom(&["second.example.dev"]))
        .await
        .unwrap();
    store.flush().await.unwrap();

    let reopened = JsonFileStore::open(&path).await.unwrap();
    let loaded = reopened.load().await.unwrap();
    assert_eq!(loaded.custom_domains, vec!["second.example.dev"]);
}

#[tokio::test]
async fn burst_of_stores_coalesces_into_one_delayed_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileStore::open(&path).await.unwrap();

    for i in 0..10 {
        store
            .store(settings_with_custom(&[&format!("site-{i}.example.dev")]))
            .await
            .unwrap();
    }

    // Inside the coalescing window nothing has hit the disk yet.
    assert!(!path.exists());

    tokio::time::sleep(Duration::from_millis(700)).await;
    let bytes = tokio::fs::read(&path).await.unwrap();
    let on_disk: Settings = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(on_disk.custom_domains, vec!["site-9.example.dev"]);
}

#[tokio::test]
async fn flush_is_idempotent_without_pending_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileStore::open(&path).await.unwrap();

    store.flush().await.unwrap();
    store.flush().await.unwrap();
    assert!(path.exists());
}
