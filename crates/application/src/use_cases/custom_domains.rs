use focusgate_domain::domain_name::normalize_domain;
use focusgate_domain::FilterError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{FilterEnginePort, SettingsStore};

pub struct AddCustomDomainUseCase {
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
}

impl AddCustomDomainUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, engine: Arc<dyn FilterEnginePort>) -> Self {
        Self { store, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<(), FilterError> {
        let normalized = normalize_domain(domain).map_err(FilterError::InvalidDomain)?;

        let mut settings = self.store.load().await?;
        if settings.custom_domains.iter().any(|d| d == &normalized) {
            return Ok(());
        }
        settings.custom_domains.push(normalized.clone());
        let custom = settings.custom_domains.clone();
        self.store.store(settings).await?;

        self.engine.install_custom(&custom);

        info!(domain = %normalized, total = custom.len(), "Custom domain added");
        Ok(())
    }
}

pub struct RemoveCustomDomainUseCase {
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
}

impl RemoveCustomDomainUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, engine: Arc<dyn FilterEnginePort>) -> Self {
        Self { store, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<(), FilterError> {
        let target = domain.trim().to_ascii_lowercase();

        let mut settings = self.store.load().await?;
        settings.custom_domains.retain(|d| d != &target);
        let custom = settings.custom_domains.clone();
        self.store.store(settings).await?;

        self.engine.install_custom(&custom);

        info!(domain = %target, total = custom.len(), "Custom domain removed");
        Ok(())
    }
}
