use focusgate_application::use_cases::SyncSettingsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that pushes local settings to the configured cloud
/// backend. Default interval: 30 minutes.
pub struct CloudSyncJob {
    sync: Arc<SyncSettingsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CloudSyncJob {
    pub fn new(sync: Arc<SyncSettingsUseCase>) -> Self {
        Self {
            sync,
            interval_secs: 1800,
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
            "Starting cloud sync job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CloudSyncJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.sync.execute().await {
                            error!(error = %e, "CloudSyncJob: sync failed");
                        }
                    }
                }
            }
        });
    }
}
