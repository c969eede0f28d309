use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateConfig {
    /// Sources fetched simultaneously per chunk. Bounds outbound
    /// connections to the hosts-file mirrors.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Staleness interval for the background refresh job.
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            interval_hours: default_interval_hours(),
        }
    }
}

fn default_chunk_size() -> usize {
    2
}

fn default_interval_hours() -> u64 {
    24
}
