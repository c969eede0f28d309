use focusgate_application::ports::BlocklistUpdatePort;
use focusgate_domain::FilterError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Background job that periodically re-runs the full blocklist update
/// pipeline.
///
/// `Arc<Self>` spawn so the job owns its state across ticks; the first
/// tick is consumed immediately so the update does not run at startup
/// (startup already publishes the persisted consolidated set).
/// Default interval: 24 h (86 400 s).
pub struct BlocklistRefreshJob {
    updater: Arc<dyn BlocklistUpdatePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BlocklistRefreshJob {
    pub fn new(updater: Arc<dyn BlocklistUpdatePort>) -> Self {
        Self {
            updater,
            interval_secs: 86400,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting blocklist refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BlocklistRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.updater.update_all(false).await {
                            Ok(summary) => info!(
                                successful = summary.successful_sources,
                                total = summary.total_sources,
                                domains = summary.total_domains,
                                "BlocklistRefreshJob: update completed"
                            ),
                            Err(FilterError::UpdateInProgress) => {
                                warn!("BlocklistRefreshJob: skipped, update already running");
                            }
                            Err(e) => error!(error = %e, "BlocklistRefreshJob: update failed"),
                        }
                    }
                }
            }
        });
    }
}
