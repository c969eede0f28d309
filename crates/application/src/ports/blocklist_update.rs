use async_trait::async_trait;
use focusgate_domain::{FilterError, UpdateSummary};

/// Drives the multi-source fetch/merge/persist pipeline.
#[async_trait]
pub trait BlocklistUpdatePort: Send + Sync {
    /// Fetches every enabled source, merges the results, persists the
    /// consolidated set and republishes it to the engine. `force`
    /// bypasses the per-URL content cache. Rejects with
    /// [`FilterError::UpdateInProgress`] when a run is already active.
    async fn update_all(&self, force: bool) -> Result<UpdateSummary, FilterError>;

    /// Fetches and parses a single list URL without touching the
    /// persisted state. Used to preview a source before adding it.
    async fn fetch_list(&self, url: &str) -> Result<Vec<String>, FilterError>;
}
