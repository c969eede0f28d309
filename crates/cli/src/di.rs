use focusgate_application::ports::{
    BlocklistUpdatePort, CloudSyncProvider, FilterEnginePort, SettingsStore,
};
use focusgate_application::use_cases::{
    AddCustomDomainUseCase, AddKeywordUseCase, AddSourceUseCase, FetchBlocklistUseCase,
    GetBlockedPageUrlUseCase, GetStatsUseCase, RecordBlockUseCase, RemoveCustomDomainUseCase,
    RemoveKeywordUseCase, RemoveSourceUseCase, SetActiveUseCase, SyncSettingsUseCase,
    ToggleSourceUseCase, UpdateBlocklistsUseCase,
};
use focusgate_application::MessageRouter;
use focusgate_domain::config::Config;
use focusgate_engine::cloud::provider_from_config;
use focusgate_engine::fetch::{BlocklistFetcher, BlocklistOrchestrator, ReqwestTransport};
use focusgate_engine::storage::{JsonFileStore, MemoryStore};
use focusgate_engine::{FilterEngine, SystemClock};
use std::sync::Arc;
use tracing::info;

/// All wired dependencies. Construction order: store, engine compiled
/// from the persisted settings, then the pipeline and use cases on top.
pub struct AppContext {
    pub store: Arc<dyn SettingsStore>,
    pub engine: Arc<FilterEngine>,
    pub engine_port: Arc<dyn FilterEnginePort>,
    pub updater: Arc<dyn BlocklistUpdatePort>,
    pub cloud: Arc<dyn CloudSyncProvider>,
    pub router: MessageRouter,
    pub record_block: RecordBlockUseCase,
    pub get_stats: GetStatsUseCase,
    pub add_keyword: AddKeywordUseCase,
    pub remove_keyword: RemoveKeywordUseCase,
    pub add_source: AddSourceUseCase,
    pub remove_source: RemoveSourceUseCase,
    pub toggle_source: ToggleSourceUseCase,
    pub sync_settings: Arc<SyncSettingsUseCase>,
}

impl AppContext {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn SettingsStore> = if config.storage.path.is_empty() {
            info!("Empty storage path, settings will not persist");
            Arc::new(MemoryStore::default())
        } else {
            Arc::new(JsonFileStore::open(&config.storage.path).await?)
        };

        let settings = store.load().await?;
        let clock = Arc::new(SystemClock);
        let engine = Arc::new(FilterEngine::from_settings(&settings, clock.clone()));
        let engine_port: Arc<dyn FilterEnginePort> = engine.clone();
        info!(
            community = engine.community_len(),
            custom = engine.custom_len(),
            "Filter engine compiled from persisted settings"
        );

        let transport = ReqwestTransport::new(config.fetch.timeout_secs)?;
        let fetcher = BlocklistFetcher::new(transport, &config.fetch, clock);
        let updater: Arc<dyn BlocklistUpdatePort> = Arc::new(BlocklistOrchestrator::new(
            fetcher,
            store.clone(),
            engine_port.clone(),
            config.update.chunk_size,
        ));

        let cloud = provider_from_config(&config.cloud)?;
        let sync_settings = Arc::new(SyncSettingsUseCase::new(store.clone(), cloud.clone()));

        let router = MessageRouter::new(
            AddCustomDomainUseCase::new(store.clone(), engine_port.clone()),
            RemoveCustomDomainUseCase::new(store.clone(), engine_port.clone()),
            SetActiveUseCase::new(store.clone(), engine_port.clone()),
            FetchBlocklistUseCase::new(updater.clone()),
            UpdateBlocklistsUseCase::new(updater.clone()),
            GetBlockedPageUrlUseCase::new(config.blocking.blocked_page.clone()),
        );

        Ok(Self {
            store: store.clone(),
            engine,
            engine_port: engine_port.clone(),
            updater: updater.clone(),
            cloud,
            router,
            record_block: RecordBlockUseCase::new(store.clone()),
            get_stats: GetStatsUseCase::new(store.clone()),
            add_keyword: AddKeywordUseCase::new(store.clone(), engine_port.clone()),
            remove_keyword: RemoveKeywordUseCase::new(store.clone(), engine_port),
            add_source: AddSourceUseCase::new(store.clone()),
            remove_source: RemoveSourceUseCase::new(store.clone()),
            toggle_source: ToggleSourceUseCase::new(store, updater),
            sync_settings,
        })
    }
}
