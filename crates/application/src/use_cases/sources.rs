use focusgate_domain::{BlocklistSource, FilterError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{BlocklistUpdatePort, SettingsStore};

pub struct AddSourceUseCase {
    store: Arc<dyn SettingsStore>,
}

impl AddSourceUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, source: BlocklistSource) -> Result<(), FilterError> {
        BlocklistSource::validate_name(&source.name)
            .map_err(FilterError::InvalidBlocklistSource)?;
        BlocklistSource::validate_url(&source.url)
            .map_err(FilterError::InvalidBlocklistSource)?;
        BlocklistSource::validate_description(&source.description)
            .map_err(FilterError::InvalidBlocklistSource)?;

        let mut settings = self.store.load().await?;
        if settings.source_by_id(&source.id).is_some() {
            return Err(FilterError::InvalidBlocklistSource(format!(
                "source id already exists: {}",
                source.id
            )));
        }
        let id = source.id.clone();
        settings.blocklist_sources.push(source);
        self.store.store(settings).await?;

        info!(source_id = %id, "Blocklist source added");
        Ok(())
    }
}

pub struct ToggleSourceUseCase {
    store: Arc<dyn SettingsStore>,
    update: Arc<dyn BlocklistUpdatePort>,
}

impl ToggleSourceUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, update: Arc<dyn BlocklistUpdatePort>) -> Self {
        Self { store, update }
    }

    /// Enables or disables a source. Enabling a source that has never
    /// produced a successful result triggers a full update so its
    /// domains become effective immediately.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str, enabled: bool) -> Result<(), FilterError> {
        let mut settings = self.store.load().await?;
        let source = settings
            .blocklist_sources
            .iter_mut()
            .find(|s| s.id.as_ref() == id)
            .ok_or_else(|| FilterError::SourceNotFound(id.to_string()))?;

        let was_enabled = source.enabled;
        source.enabled = enabled;

        let never_fetched = settings
            .result_for_source(id)
            .map(|r| !r.success)
            .unwrap_or(true);
        self.store.store(settings).await?;

        info!(source_id = %id, enabled, "Blocklist source toggled");

        if enabled && !was_enabled && never_fetched {
            match self.update.update_all(false).await {
                Ok(summary) => info!(
                    source_id = %id,
                    total_domains = summary.total_domains,
                    "First-enable update completed"
                ),
                Err(FilterError::UpdateInProgress) => {
                    warn!(source_id = %id, "First-enable update skipped; run already active")
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

pub struct RemoveSourceUseCase {
    store: Arc<dyn SettingsStore>,
}

impl RemoveSourceUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<(), FilterError> {
        let mut settings = self.store.load().await?;
        let before = settings.blocklist_sources.len();
        settings.blocklist_sources.retain(|s| s.id.as_ref() != id);
        if settings.blocklist_sources.len() == before {
            return Err(FilterError::SourceNotFound(id.to_string()));
        }
        settings
            .blocklist_results
            .retain(|r| r.source_id.as_ref() != id);
        self.store.store(settings).await?;

        info!(source_id = %id, "Blocklist source removed");
        Ok(())
    }
}
