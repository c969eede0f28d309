use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Per-attempt timeout in seconds; a timed-out attempt counts as
    /// a failed attempt for retry purposes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Responses smaller than this are failures even on HTTP 200.
    #[serde(default = "default_min_bytes")]
    pub min_bytes: usize,

    /// How long a fetched list stays fresh in the content cache.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
            min_bytes: default_min_bytes(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_attempts() -> u32 {
    3
}

fn default_min_bytes() -> usize {
    64
}

fn default_cache_ttl_secs() -> u64 {
    3600
}
