use async_trait::async_trait;
use focusgate_domain::{FilterError, Settings};

/// Capability interface for the optional cloud backend.
///
/// The default implementation is a null object (offline mode); a real
/// provider is selected once at startup based on configuration
/// presence, never by conditional loading at call sites.
#[async_trait]
pub trait CloudSyncProvider: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn push(&self, settings: &Settings) -> Result<(), FilterError>;

    async fn pull(&self) -> Result<Option<Settings>, FilterError>;
}
