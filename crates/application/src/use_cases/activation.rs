use focusgate_domain::FilterError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{FilterEnginePort, SettingsStore};

/// Global kill switch. Toggling never touches the domain/keyword data,
/// so re-enabling restores the exact prior blocking behavior.
pub struct SetActiveUseCase {
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
}

impl SetActiveUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, engine: Arc<dyn FilterEnginePort>) -> Self {
        Self { store, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, active: bool) -> Result<(), FilterError> {
        let mut settings = self.store.load().await?;
        settings.is_active = active;
        self.store.store(settings).await?;

        self.engine.set_active(active);

        info!(active, "Protection toggled");
        Ok(())
    }
}
