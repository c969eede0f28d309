#![allow(dead_code)]

use async_trait::async_trait;
use focusgate_application::ports::{BlocklistUpdatePort, CloudSyncProvider, SettingsStore};
use focusgate_domain::{FilterError, Settings, UpdateSummary};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockUpdatePort {
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockUpdatePort {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl BlocklistUpdatePort for MockUpdatePort {
    async fn update_all(&self, _force: bool) -> Result<UpdateSummary, FilterError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(FilterError::Network("mock failure".to_string()));
        }
        Ok(UpdateSummary {
            results: Vec::new(),
            total_domains: 0,
            successful_sources: 0,
            total_sources: 0,
            message: "mock".to_string(),
        })
    }

    async fn fetch_list(&self, _url: &str) -> Result<Vec<String>, FilterError> {
        Ok(Vec::new())
    }
}

pub struct MockSettingsStore {
    state: RwLock<Settings>,
    store_count: AtomicU64,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Settings::default()),
            store_count: AtomicU64::new(0),
        }
    }

    pub fn store_count(&self) -> u64 {
        self.store_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn load(&self) -> Result<Settings, FilterError> {
        Ok(self.state.read().await.clone())
    }

    async fn store(&self, settings: Settings) -> Result<(), FilterError> {
        self.store_count.fetch_add(1, Ordering::Relaxed);
        *self.state.write().await = settings;
        Ok(())
    }

    async fn flush(&self) -> Result<(), FilterError> {
        Ok(())
    }
}

pub struct MockCloudProvider {
    configured: bool,
    push_count: AtomicU64,
}

impl MockCloudProvider {
    pub fn new(configured: bool) -> Self {
        Self {
            configured,
            push_count: AtomicU64::new(0),
        }
    }

    pub fn push_count(&self) -> u64 {
        self.push_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CloudSyncProvider for MockCloudProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn push(&self, _settings: &Settings) -> Result<(), FilterError> {
        self.push_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn pull(&self) -> Result<Option<Settings>, FilterError> {
        Ok(None)
    }
}
