mod http;
mod null;

pub use http::HttpCloudSync;
pub use null::NullCloudSync;

use focusgate_application::ports::CloudSyncProvider;
use focusgate_domain::config::CloudConfig;
use focusgate_domain::FilterError;
use std::sync::Arc;
use tracing::info;

/// Selects the provider once at startup from configuration presence.
pub fn provider_from_config(
    config: &CloudConfig,
) -> Result<Arc<dyn CloudSyncProvider>, FilterError> {
    match (config.endpoint.clone(), config.api_key.clone()) {
        (Some(endpoint), Some(api_key)) => {
            info!(%endpoint, "Cloud sync enabled");
            Ok(Arc::new(HttpCloudSync::new(endpoint, api_key)?))
        }
        _ => {
            info!("Cloud sync not configured, running offline");
            Ok(Arc::new(NullCloudSync))
        }
    }
}
