use async_trait::async_trait;
use focusgate_application::ports::CloudSyncProvider;
use focusgate_domain::{FilterError, Settings};

/// Offline-mode provider: reports unconfigured and does nothing.
pub struct NullCloudSync;

#[async_trait]
impl CloudSyncProvider for NullCloudSync {
    fn is_configured(&self) -> bool {
        false
    }

    async fn push(&self, _settings: &Settings) -> Result<(), FilterError> {
        Ok(())
    }

    async fn pull(&self) -> Result<Option<Settings>, FilterError> {
        Ok(None)
    }
}
