use focusgate_domain::keyword::normalize_keyword;
use focusgate_domain::FilterError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{FilterEnginePort, SettingsStore};

pub struct AddKeywordUseCase {
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
}

impl AddKeywordUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, engine: Arc<dyn FilterEnginePort>) -> Self {
        Self { store, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, keyword: &str) -> Result<(), FilterError> {
        let normalized = normalize_keyword(keyword).map_err(FilterError::InvalidKeyword)?;

        let mut settings = self.store.load().await?;
        if settings.blocked_keywords.iter().any(|k| k == &normalized) {
            return Ok(());
        }
        settings.blocked_keywords.push(normalized.clone());
        let keywords = settings.blocked_keywords.clone();
        self.store.store(settings).await?;

        self.engine.install_keywords(&keywords);

        info!(keyword = %normalized, total = keywords.len(), "Keyword added");
        Ok(())
    }
}

pub struct RemoveKeywordUseCase {
    store: Arc<dyn SettingsStore>,
    engine: Arc<dyn FilterEnginePort>,
}

impl RemoveKeywordUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, engine: Arc<dyn FilterEnginePort>) -> Self {
        Self { store, engine }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, keyword: &str) -> Result<(), FilterError> {
        let target = keyword.trim().to_lowercase();

        let mut settings = self.store.load().await?;
        settings.blocked_keywords.retain(|k| k != &target);
        let keywords = settings.blocked_keywords.clone();
        self.store.store(settings).await?;

        self.engine.install_keywords(&keywords);

        info!(keyword = %target, total = keywords.len(), "Keyword removed");
        Ok(())
    }
}
