use chrono::Utc;
use focusgate_domain::{FilterError, Settings};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{CloudSyncProvider, SettingsStore};

/// Pushes the local settings to the cloud backend, falling back to
/// offline mode when the backend is unconfigured or unreachable.
/// Local blocking is never affected by a failed sync.
pub struct SyncSettingsUseCase {
    store: Arc<dyn SettingsStore>,
    provider: Arc<dyn CloudSyncProvider>,
}

impl SyncSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, provider: Arc<dyn CloudSyncProvider>) -> Self {
        Self { store, provider }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<(), FilterError> {
        let mut settings = self.store.load().await?;

        if !self.provider.is_configured() {
            if !settings.offline_mode {
                settings.offline_mode = true;
                self.store.store(settings).await?;
            }
            return Ok(());
        }

        match self.provider.push(&settings).await {
            Ok(()) => {
                settings.offline_mode = false;
                settings.last_cloud_sync = Some(Utc::now().to_rfc3339());
                self.store.store(settings).await?;
                info!("Settings synced to cloud");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Cloud sync failed; staying in offline mode");
                settings.offline_mode = true;
                settings.log_error(Utc::now().to_rfc3339(), "cloud-sync", e.to_string());
                self.store.store(settings).await?;
                Err(e)
            }
        }
    }

    /// Pulls the remote settings once, replacing the local state when
    /// the backend has one. A failed or empty pull keeps the local
    /// settings intact; the failure only flips offline mode.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Result<Option<Settings>, FilterError> {
        if !self.provider.is_configured() {
            return Ok(None);
        }

        match self.provider.pull().await {
            Ok(Some(remote)) => {
                self.store.store(remote.clone()).await?;
                info!("Settings restored from cloud");
                Ok(Some(remote))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                warn!(error = %e, "Cloud restore failed; keeping local settings");
                let mut settings = self.store.load().await?;
                settings.offline_mode = true;
                settings.log_error(Utc::now().to_rfc3339(), "cloud-sync", e.to_string());
                self.store.store(settings).await?;
                Ok(None)
            }
        }
    }
}
