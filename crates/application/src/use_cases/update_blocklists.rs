use focusgate_domain::{FilterError, UpdateSummary};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlocklistUpdatePort;

pub struct UpdateBlocklistsUseCase {
    update: Arc<dyn BlocklistUpdatePort>,
}

impl UpdateBlocklistsUseCase {
    pub fn new(update: Arc<dyn BlocklistUpdatePort>) -> Self {
        Self { update }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, force: bool) -> Result<UpdateSummary, FilterError> {
        let summary = self.update.update_all(force).await?;

        info!(
            successful = summary.successful_sources,
            total = summary.total_sources,
            domains = summary.total_domains,
            "Blocklist update finished"
        );
        Ok(summary)
    }
}

pub struct FetchBlocklistUseCase {
    update: Arc<dyn BlocklistUpdatePort>,
}

impl FetchBlocklistUseCase {
    pub fn new(update: Arc<dyn BlocklistUpdatePort>) -> Self {
        Self { update }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<Vec<String>, FilterError> {
        self.update.fetch_list(url).await
    }
}
