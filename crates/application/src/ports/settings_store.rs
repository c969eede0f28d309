use async_trait::async_trait;
use focusgate_domain::{FilterError, Settings};

/// The flat persisted key-value namespace.
///
/// Implementations must give read-after-write consistency within the
/// process: a `load` issued after a `store` observes the stored value
/// even while a coalesced disk write is still pending.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<Settings, FilterError>;

    async fn store(&self, settings: Settings) -> Result<(), FilterError>;

    /// Forces any coalesced pending write out immediately.
    async fn flush(&self) -> Result<(), FilterError>;
}
