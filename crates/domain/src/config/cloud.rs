use serde::{Deserialize, Serialize};

/// Cloud sync backend. Both fields present selects the HTTP provider
/// at startup; otherwise the null provider runs and the install stays
/// in offline mode.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CloudConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Sync interval for the background job, in minutes.
    #[serde(default = "default_sync_interval_minutes")]
    pub sync_interval_minutes: u64,
}

fn default_sync_interval_minutes() -> u64 {
    30
}

impl CloudConfig {
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some()
    }
}
