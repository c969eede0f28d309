use focusgate_domain::{BlockStats, FilterError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::SettingsStore;

/// Updates the block counters after a confirmed block.
pub struct RecordBlockUseCase {
    store: Arc<dyn SettingsStore>,
}

impl RecordBlockUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, today: &str) -> Result<BlockStats, FilterError> {
        let mut settings = self.store.load().await?;
        settings.stats.record_block(today);
        let stats = settings.stats.clone();
        self.store.store(settings).await?;

        debug!(
            blocks_today = stats.blocks_today,
            total = stats.total_blocks,
            "Block recorded"
        );
        Ok(stats)
    }
}

pub struct GetStatsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl GetStatsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<BlockStats, FilterError> {
        Ok(self.store.load().await?.stats)
    }
}
