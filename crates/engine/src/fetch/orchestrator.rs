use super::fetcher::{BlocklistFetcher, FetchTransport};
use super::parser::parse_blocklist;
use async_trait::async_trait;
use chrono::Utc;
use focusgate_application::ports::{BlocklistUpdatePort, FilterEnginePort, SettingsStore};
use focusgate_domain::{BlocklistFetchResult, BlocklistSource, FilterError, UpdateSummary};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    Fetching,
    Merging,
    Persisting,
}

/// Runs the fetch/merge/persist pipeline across all enabled sources.
///
/// Sources are fetched in small parallel chunks; one failing source
/// never aborts the run. A failed source keeps contributing its last
/// successful domain set so coverage does not drop during an outage.
pub struct BlocklistOrchestrator<T: FetchTransport> {
    fetcher: BlocklistFetcher<T>,
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
    chunk_size: usize,
    phase: RwLock<UpdatePhase>,
    running: Mutex<()>,
}

impl<T: FetchTransport> BlocklistOrchestrator<T> {
    pub fn new(
        fetcher: BlocklistFetcher<T>,
        store: Arc<dyn SettingsStore>,
        engine: Arc<dyn FilterEnginePort>,
        chunk_size: usize,
    ) -> Self {
        Self {
            fetcher,
            store,
            engine,
            chunk_size: chunk_size.max(1),
            phase: RwLock::new(UpdatePhase::Idle),
            running: Mutex::new(()),
        }
    }

    pub async fn phase(&self) -> UpdatePhase {
        *self.phase.read().await
    }

    async fn set_phase(&self, phase: UpdatePhase) {
        *self.phase.write().await = phase;
    }

    async fn fetch_source(
        &self,
        source: &BlocklistSource,
        previous: Option<&BlocklistFetchResult>,
        force: bool,
    ) -> BlocklistFetchResult {
        let now = Utc::now().to_rfc3339();
        match self.fetch_and_parse(&source.url, force).await {
            Ok(domains) => BlocklistFetchResult::succeeded(source.id.clone(), domains, now),
            Err(e) => {
                warn!(source = %source.id, error = %e, "Source fetch failed");
                // Carry the previous successful set forward so one bad
                // run does not blank out an established source.
                let mut result = BlocklistFetchResult::failed(source.id.clone(), e.to_string(), now);
                if let Some(prev) = previous.filter(|p| !p.domains.is_empty()) {
                    result.domains = prev.domains.clone();
                    result.domain_count = prev.domains.len();
                }
                result
            }
        }
    }

    async fn fetch_and_parse(&self, url: &str, force: bool) -> Result<Vec<String>, FilterError> {
        let body = self.fetcher.fetch(url, force).await?;
        let parsed = parse_blocklist(&body);
        if parsed.domains.is_empty() {
            return Err(FilterError::EmptyBlocklist(url.to_string()));
        }
        Ok(parsed.domains)
    }
}

#[async_trait]
impl<T: FetchTransport> BlocklistUpdatePort for BlocklistOrchestrator<T> {
    #[instrument(skip(self))]
    async fn update_all(&self, force: bool) -> Result<UpdateSummary, FilterError> {
        let Ok(_guard) = self.running.try_lock() else {
            return Err(FilterError::UpdateInProgress);
        };

        let settings = self.store.load().await?;
        let enabled: Vec<BlocklistSource> = settings
            .blocklist_sources
            .iter()
            .filter(|s| s.enabled)
            .cloned()
            .collect();
        let total_sources = enabled.len();
        info!(sources = total_sources, force, "Starting blocklist update");

        self.set_phase(UpdatePhase::Fetching).await;
        let mut results: Vec<BlocklistFetchResult> = Vec::with_capacity(total_sources);
        for chunk in enabled.chunks(self.chunk_size) {
            let fetches = chunk.iter().map(|source| {
                self.fetch_source(source, settings.result_for_source(&source.id), force)
            });
            results.extend(futures::future::join_all(fetches).await);
        }

        self.set_phase(UpdatePhase::Merging).await;
        let merged: BTreeSet<String> = results
            .iter()
            .flat_map(|r| r.domains.iter().cloned())
            .collect();
        let merged: Vec<String> = merged.into_iter().collect();
        let successful_sources = results.iter().filter(|r| r.success).count();
        let total_domains = merged.len();

        self.set_phase(UpdatePhase::Persisting).await;
        let mut updated = self.store.load().await?;
        updated.blocked_domains = merged.clone();
        updated.blocklist_results = results.clone();
        let result = self.store.store(updated).await;

        self.engine.install_community(&merged);
        self.set_phase(UpdatePhase::Idle).await;
        result?;

        let message = format!(
            "Updated {successful_sources}/{total_sources} sources, {total_domains} domains"
        );
        info!(successful_sources, total_sources, total_domains, "Blocklist update finished");
        Ok(UpdateSummary {
            results,
            total_domains,
            successful_sources,
            total_sources,
            message,
        })
    }

    #[instrument(skip(self))]
    async fn fetch_list(&self, url: &str) -> Result<Vec<String>, FilterError> {
        self.fetch_and_parse(url, false).await
    }
}
