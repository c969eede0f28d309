use async_trait::async_trait;
use focusgate_application::ports::SettingsStore;
use focusgate_domain::{FilterError, Settings};
use tokio::sync::RwLock;

/// Volatile store for tests and ephemeral runs.
pub struct MemoryStore {
    state: RwLock<Settings>,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: RwLock::new(settings),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn load(&self) -> Result<Settings, FilterError> {
        Ok(self.state.read().await.clone())
    }

    async fn store(&self, settings: Settings) -> Result<(), FilterError> {
        *self.state.write().await = settings;
        Ok(())
    }

    async fn flush(&self) -> Result<(), FilterError> {
        Ok(())
    }
}
