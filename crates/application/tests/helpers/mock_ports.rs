#![allow(dead_code)]

use async_trait::async_trait;
use focusgate_application::ports::{
    BlocklistUpdatePort, FilterEnginePort, SettingsStore,
};
use focusgate_domain::{FilterError, Settings, UpdateSummary, Verdict};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;

pub struct MockSettingsStore {
    state: RwLock<Settings>,
    store_count: AtomicU64,
    fail_stores: AtomicBool,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            state: RwLock::new(settings),
            store_count: AtomicU64::new(0),
            fail_stores: AtomicBool::new(false),
        }
    }

    pub fn store_count(&self) -> u64 {
        self.store_count.load(Ordering::Relaxed)
    }

    pub fn set_fail_stores(&self, fail: bool) {
        self.fail_stores.store(fail, Ordering::Relaxed);
    }

    /// Direct read of the current state, bypassing the port.
    pub async fn load_settings(&self) -> Settings {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn load(&self) -> Result<Settings, FilterError> {
        Ok(self.state.read().await.clone())
    }

    async fn store(&self, settings: Settings) -> Result<(), FilterError> {
        if self.fail_stores.load(Ordering::Relaxed) {
            return Err(FilterError::Storage("mock store failure".to_string()));
        }
        self.store_count.fetch_add(1, Ordering::Relaxed);
        *self.state.write().await = settings;
        Ok(())
    }

    async fn flush(&self) -> Result<(), FilterError> {
        Ok(())
    }
}

/// Engine double that records every install call instead of matching.
pub struct MockFilterEngine {
    active: AtomicBool,
    pub community: Mutex<Vec<String>>,
    pub custom: Mutex<Vec<String>>,
    pub keywords: Mutex<Vec<String>>,
    pub allowlist: Mutex<Vec<String>>,
    install_count: AtomicU64,
}

impl MockFilterEngine {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            community: Mutex::new(Vec::new()),
            custom: Mutex::new(Vec::new()),
            keywords: Mutex::new(Vec::new()),
            allowlist: Mutex::new(Vec::new()),
            install_count: AtomicU64::new(0),
        }
    }

    pub fn install_count(&self) -> u64 {
        self.install_count.load(Ordering::Relaxed)
    }

    pub fn custom_domains(&self) -> Vec<String> {
        self.custom.lock().unwrap().clone()
    }

    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }
}

impl FilterEnginePort for MockFilterEngine {
    fn evaluate(&self, _tab_id: i64, _url: &str) -> Verdict {
        Verdict::Allow
    }

    fn evaluate_tab_event(&self, _tab_id: i64, _url: &str) -> Verdict {
        Verdict::Allow
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn reload(&self, settings: &Settings) {
        *self.community.lock().unwrap() = settings.blocked_domains.clone();
        *self.custom.lock().unwrap() = settings.custom_domains.clone();
        *self.keywords.lock().unwrap() = settings.blocked_keywords.clone();
        *self.allowlist.lock().unwrap() = settings.allowed_domains.clone();
    }

    fn install_community(&self, domains: &[String]) {
        self.install_count.fetch_add(1, Ordering::Relaxed);
        *self.community.lock().unwrap() = domains.to_vec();
    }

    fn install_custom(&self, domains: &[String]) {
        self.install_count.fetch_add(1, Ordering::Relaxed);
        *self.custom.lock().unwrap() = domains.to_vec();
    }

    fn install_keywords(&self, keywords: &[String]) {
        self.install_count.fetch_add(1, Ordering::Relaxed);
        *self.keywords.lock().unwrap() = keywords.to_vec();
    }

    fn install_allowlist(&self, domains: &[String]) {
        self.install_count.fetch_add(1, Ordering::Relaxed);
        *self.allowlist.lock().unwrap() = domains.to_vec();
    }

    fn community_len(&self) -> usize {
        self.community.lock().unwrap().len()
    }

    fn custom_len(&self) -> usize {
        self.custom.lock().unwrap().len()
    }
}

pub struct MockUpdatePort {
    call_count: AtomicU64,
    pub in_progress: AtomicBool,
}

impl MockUpdatePort {
    pub fn new() -> Self {
        Self {
            call_count: AtomicU64::new(0),
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlocklistUpdatePort for MockUpdatePort {
    async fn update_all(&self, _force: bool) -> Result<UpdateSummary, FilterError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.in_progress.load(Ordering::Relaxed) {
            return Err(FilterError::UpdateInProgress);
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
        Ok(vec!["adult-site.com".to_string()])
    }
}
